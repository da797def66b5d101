use crate::client::NotificationClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::notification::{Notification, Recipient};
use async_trait::async_trait;

const PATH: &str = "/notify";

#[async_trait]
impl NotificationClient for HttpClient {
    async fn get_notifications(
        &self,
        recipient: &Recipient,
    ) -> Result<Vec<Notification>, CoveraError> {
        let response = self.get(&format!("{PATH}/{recipient}")).await?;
        let notifications = response.json().await?;
        Ok(notifications)
    }

    async fn delete_notification(&self, notification_id: u64) -> Result<(), CoveraError> {
        self.delete(&format!("{PATH}/delete/{notification_id}"))
            .await?;
        Ok(())
    }
}
