use crate::client::CommunicationClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::communication::{SendMail, SendSms};
use async_trait::async_trait;

const MAIL_PATH: &str = "/api/mail/send";
const SMS_PATH: &str = "/api/sms/send";

#[async_trait]
impl CommunicationClient for HttpClient {
    async fn send_mail(&self, command: &SendMail) -> Result<(), CoveraError> {
        self.post(MAIL_PATH, &command).await?;
        Ok(())
    }

    async fn send_sms(&self, command: &SendSms) -> Result<(), CoveraError> {
        self.post(SMS_PATH, &command).await?;
        Ok(())
    }
}
