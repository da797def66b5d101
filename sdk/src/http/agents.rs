use crate::client::AgentClient;
use crate::error::CoveraError;
use crate::http::client::HttpClient;
use crate::http::HttpTransport;
use crate::models::agent::Agent;
use async_trait::async_trait;

const PATH: &str = "/agents";

#[async_trait]
impl AgentClient for HttpClient {
    async fn get_agents(&self) -> Result<Vec<Agent>, CoveraError> {
        let response = self.get(&format!("{PATH}/all")).await?;
        let agents = response.json().await?;
        Ok(agents)
    }

    async fn update_agent(&self, agent_id: u64, agent: &Agent) -> Result<String, CoveraError> {
        let response = self.put(&format!("{PATH}/update/{agent_id}"), agent).await?;
        let confirmation = response.text().await?;
        Ok(confirmation)
    }

    async fn delete_agent(&self, agent_id: u64) -> Result<(), CoveraError> {
        self.delete(&format!("{PATH}/delete/{agent_id}")).await?;
        Ok(())
    }
}
