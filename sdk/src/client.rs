use crate::auth::login::Login;
use crate::auth::register::Register;
use crate::auth::register_agent::RegisterAgent;
use crate::error::CoveraError;
use crate::models::agent::Agent;
use crate::models::claim::{Claim, FileClaim};
use crate::models::communication::{SendMail, SendSms};
use crate::models::customer::Customer;
use crate::models::notification::{Notification, Recipient};
use crate::models::policy::{CreatePolicy, Policy, PolicyCatalogEntry};
use async_trait::async_trait;

/// `Client` aggregates every resource client of the Covera API.
pub trait Client:
    AuthClient
    + NotificationClient
    + CustomerClient
    + AgentClient
    + PolicyClient
    + ClaimClient
    + CommunicationClient
    + Sync
    + Send
{
}

/// Authentication operations. Successful logins store the returned bearer
/// token so later requests carry it automatically.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Signs in a customer or administrator, returning the raw token.
    async fn login(&self, command: &Login) -> Result<String, CoveraError>;

    /// Signs in an agent through the dedicated agent endpoint.
    async fn login_agent(&self, command: &Login) -> Result<String, CoveraError>;

    /// Registers a new customer account.
    async fn register(&self, command: &Register) -> Result<String, CoveraError>;

    /// Registers a new agent account. Requires an administrator token.
    async fn register_agent(&self, command: &RegisterAgent) -> Result<String, CoveraError>;

    /// Signs out by discarding the stored token. Purely local: the backend
    /// keeps no session state beyond the token itself. Hosts navigate to
    /// [`RouteGuard::redirect_after_logout`](crate::routing::RouteGuard::redirect_after_logout)
    /// afterwards.
    async fn logout(&self);
}

#[async_trait]
pub trait NotificationClient: Send + Sync {
    /// Fetches the pending notifications addressed to the recipient.
    async fn get_notifications(
        &self,
        recipient: &Recipient,
    ) -> Result<Vec<Notification>, CoveraError>;

    /// Marks a notification as read by deleting it server-side.
    async fn delete_notification(&self, notification_id: u64) -> Result<(), CoveraError>;
}

#[async_trait]
pub trait CustomerClient: Send + Sync {
    async fn get_customer(&self, customer_id: u64) -> Result<Customer, CoveraError>;
    async fn get_customers(&self) -> Result<Vec<Customer>, CoveraError>;
    async fn update_customer(&self, customer: &Customer) -> Result<String, CoveraError>;
}

#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn get_agents(&self) -> Result<Vec<Agent>, CoveraError>;
    async fn update_agent(&self, agent_id: u64, agent: &Agent) -> Result<String, CoveraError>;
    async fn delete_agent(&self, agent_id: u64) -> Result<(), CoveraError>;
}

#[async_trait]
pub trait PolicyClient: Send + Sync {
    async fn get_policies(&self) -> Result<Vec<Policy>, CoveraError>;
    async fn get_policy(&self, policy_id: u64) -> Result<Policy, CoveraError>;
    async fn get_customer_policies(&self, customer_id: u64) -> Result<Vec<Policy>, CoveraError>;
    async fn create_policy(&self, command: &CreatePolicy) -> Result<Policy, CoveraError>;
    async fn delete_policy(&self, policy_id: u64) -> Result<(), CoveraError>;
    async fn get_policy_catalog(&self) -> Result<Vec<PolicyCatalogEntry>, CoveraError>;
    async fn create_policy_catalog_entry(
        &self,
        entry: &PolicyCatalogEntry,
    ) -> Result<PolicyCatalogEntry, CoveraError>;
    async fn delete_policy_catalog_entry(&self, entry_id: u64) -> Result<(), CoveraError>;
}

#[async_trait]
pub trait ClaimClient: Send + Sync {
    async fn file_claim(&self, command: &FileClaim) -> Result<String, CoveraError>;
    async fn get_customer_claims(&self, customer_id: u64) -> Result<Vec<Claim>, CoveraError>;
    async fn get_claims(&self) -> Result<Vec<Claim>, CoveraError>;
}

#[async_trait]
pub trait CommunicationClient: Send + Sync {
    async fn send_mail(&self, command: &SendMail) -> Result<(), CoveraError>;
    async fn send_sms(&self, command: &SendSms) -> Result<(), CoveraError>;
}
