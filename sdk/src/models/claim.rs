use crate::error::CoveraError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// `Claim` represents a claim filed against a policy.
/// It consists of the following fields:
/// - `claim_id`: the unique identifier (numeric) of the claim.
/// - `policy_id`: the policy the claim is filed against.
/// - `customer_id`: the filing customer.
/// - `agent_id`: the agent handling the claim.
/// - `claim_amount`: the claimed amount.
/// - `status`: the processing status of the claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// The unique identifier (numeric) of the claim.
    #[serde(rename = "claimId")]
    pub claim_id: u64,
    /// The policy the claim is filed against.
    #[serde(rename = "policyId")]
    pub policy_id: u64,
    /// The filing customer.
    #[serde(rename = "customerId")]
    pub customer_id: u64,
    /// The agent handling the claim.
    #[serde(rename = "agentId", default)]
    pub agent_id: Option<u64>,
    /// The claimed amount.
    #[serde(rename = "claimAmount")]
    pub claim_amount: f64,
    /// The processing status of the claim.
    #[serde(default)]
    pub status: Option<ClaimStatus>,
}

/// `ClaimStatus` represents the processing status of a claim.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    /// The claim awaits review.
    #[default]
    Pending,
    /// The claim was approved for payout.
    Approved,
    /// The claim was rejected.
    Rejected,
}

impl FromStr for ClaimStatus {
    type Err = CoveraError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_uppercase().as_str() {
            "PENDING" => Ok(ClaimStatus::Pending),
            "APPROVED" => Ok(ClaimStatus::Approved),
            "REJECTED" => Ok(ClaimStatus::Rejected),
            _ => Err(CoveraError::InvalidClaimStatus),
        }
    }
}

impl Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimStatus::Pending => write!(f, "PENDING"),
            ClaimStatus::Approved => write!(f, "APPROVED"),
            ClaimStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

/// `FileClaim` is the payload sent when a customer files a new claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileClaim {
    /// The policy the claim is filed against.
    #[serde(rename = "policyId")]
    pub policy_id: u64,
    /// The filing customer.
    #[serde(rename = "customerId")]
    pub customer_id: u64,
    /// The agent handling the claim.
    #[serde(rename = "agentId", default)]
    pub agent_id: Option<u64>,
    /// The claimed amount.
    #[serde(rename = "claimAmount")]
    pub claim_amount: f64,
}
