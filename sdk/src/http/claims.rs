use crate::client::ClaimClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::claim::{Claim, FileClaim};
use async_trait::async_trait;

const PATH: &str = "/api/claims";

#[async_trait]
impl ClaimClient for HttpClient {
    async fn file_claim(&self, command: &FileClaim) -> Result<String, CoveraError> {
        let confirmation = self.post_for_text(&format!("{PATH}/file"), &command).await?;
        Ok(confirmation)
    }

    async fn get_customer_claims(&self, customer_id: u64) -> Result<Vec<Claim>, CoveraError> {
        let response = self.get(&format!("{PATH}/customer/{customer_id}")).await?;
        let claims = response.json().await?;
        Ok(claims)
    }

    async fn get_claims(&self) -> Result<Vec<Claim>, CoveraError> {
        let response = self.get(&format!("{PATH}/claims/all")).await?;
        let claims = response.json().await?;
        Ok(claims)
    }
}
