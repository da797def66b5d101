use crate::client::PolicyClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::policy::{CreatePolicy, Policy, PolicyCatalogEntry};
use async_trait::async_trait;

const PATH: &str = "/api/policies";
const CATALOG_PATH: &str = "/api/policylist";

#[async_trait]
impl PolicyClient for HttpClient {
    async fn get_policies(&self) -> Result<Vec<Policy>, CoveraError> {
        let response = self.get(PATH).await?;
        let policies = response.json().await?;
        Ok(policies)
    }

    async fn get_policy(&self, policy_id: u64) -> Result<Policy, CoveraError> {
        let response = self.get(&format!("{PATH}/{policy_id}")).await?;
        let policy = response.json().await?;
        Ok(policy)
    }

    async fn get_customer_policies(&self, customer_id: u64) -> Result<Vec<Policy>, CoveraError> {
        let response = self
            .get(&format!("{PATH}/getCustomerPolicyDetails/{customer_id}"))
            .await?;
        let policies = response.json().await?;
        Ok(policies)
    }

    async fn create_policy(&self, command: &CreatePolicy) -> Result<Policy, CoveraError> {
        let response = self.post(PATH, &command).await?;
        let policy = response.json().await?;
        Ok(policy)
    }

    async fn delete_policy(&self, policy_id: u64) -> Result<(), CoveraError> {
        self.delete(&format!("{PATH}/{policy_id}")).await?;
        Ok(())
    }

    async fn get_policy_catalog(&self) -> Result<Vec<PolicyCatalogEntry>, CoveraError> {
        let response = self.get(CATALOG_PATH).await?;
        let entries = response.json().await?;
        Ok(entries)
    }

    async fn create_policy_catalog_entry(
        &self,
        entry: &PolicyCatalogEntry,
    ) -> Result<PolicyCatalogEntry, CoveraError> {
        let response = self.post(CATALOG_PATH, &entry).await?;
        let entry = response.json().await?;
        Ok(entry)
    }

    async fn delete_policy_catalog_entry(&self, entry_id: u64) -> Result<(), CoveraError> {
        self.delete(&format!("{CATALOG_PATH}/{entry_id}")).await?;
        Ok(())
    }
}
