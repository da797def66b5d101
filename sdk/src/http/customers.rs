use crate::client::CustomerClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::customer::Customer;
use async_trait::async_trait;

const PATH: &str = "/customer";

#[async_trait]
impl CustomerClient for HttpClient {
    async fn get_customer(&self, customer_id: u64) -> Result<Customer, CoveraError> {
        let response = self.get(&format!("{PATH}/getCustomer/{customer_id}")).await?;
        let customer = response.json().await?;
        Ok(customer)
    }

    async fn get_customers(&self) -> Result<Vec<Customer>, CoveraError> {
        let response = self.get(&format!("{PATH}/getAllCustomer")).await?;
        let customers = response.json().await?;
        Ok(customers)
    }

    async fn update_customer(&self, customer: &Customer) -> Result<String, CoveraError> {
        let response = self.put(&format!("{PATH}/Update"), customer).await?;
        let confirmation = response.text().await?;
        Ok(confirmation)
    }
}
