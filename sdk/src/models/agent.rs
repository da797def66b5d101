use serde::{Deserialize, Serialize};

/// `Agent` represents an insurance agent profile as stored by the backend.
/// It consists of the following fields:
/// - `agent_id`: the unique identifier (numeric) of the agent.
/// - `name`: the full name of the agent.
/// - `org_email`: the organization email used for agent login.
/// - `contact_info`: free-form contact details.
/// - `gender`: the declared gender.
/// - `date`: the date of birth, as an ISO date string.
/// - `aadhar_number`: the national identity number.
/// - `phone`: the contact phone number.
/// - `address`: the postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// The unique identifier (numeric) of the agent.
    #[serde(rename = "agentId")]
    pub agent_id: u64,
    /// The full name of the agent.
    pub name: String,
    /// The organization email used for agent login.
    #[serde(rename = "orgEmail")]
    pub org_email: String,
    /// Free-form contact details.
    #[serde(rename = "contactInfo", default)]
    pub contact_info: Option<String>,
    /// The declared gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// The date of birth, as an ISO date string.
    #[serde(default)]
    pub date: Option<String>,
    /// The national identity number.
    #[serde(rename = "aadharnumber", default)]
    pub aadhar_number: Option<u64>,
    /// The contact phone number.
    #[serde(default)]
    pub phone: Option<u64>,
    /// The postal address.
    #[serde(default)]
    pub address: Option<String>,
}
