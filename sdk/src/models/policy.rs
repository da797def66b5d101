use serde::{Deserialize, Serialize};

/// `Policy` represents a policy held by a customer.
/// It consists of the following fields:
/// - `policy_id`: the unique identifier (numeric) of the policy.
/// - `name`: the display name of the policy.
/// - `policy_type`: the product category, e.g. health or auto.
/// - `premium_amount`: the premium paid by the customer.
/// - `coverage_amount`: the insured amount.
/// - `coverage_details`: the human-readable coverage description.
/// - `validity_period`: the validity in years.
/// - `customer_id`: the holding customer.
/// - `agent_id`: the assigned agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// The unique identifier (numeric) of the policy.
    #[serde(rename = "policyId")]
    pub policy_id: u64,
    /// The display name of the policy.
    pub name: String,
    /// The product category, e.g. health or auto.
    #[serde(rename = "policyType", default)]
    pub policy_type: Option<String>,
    /// The premium paid by the customer.
    #[serde(rename = "premiumAmount")]
    pub premium_amount: f64,
    /// The insured amount.
    #[serde(rename = "coverageAmount", default)]
    pub coverage_amount: Option<f64>,
    /// The human-readable coverage description.
    #[serde(rename = "coverageDetails")]
    pub coverage_details: String,
    /// The validity in years.
    #[serde(rename = "validityPeriod")]
    pub validity_period: u32,
    /// The holding customer.
    #[serde(rename = "customerId", default)]
    pub customer_id: Option<u64>,
    /// The assigned agent.
    #[serde(rename = "agentId", default)]
    pub agent_id: Option<u64>,
}

/// `PolicyCatalogEntry` represents a purchasable product from the policy
/// catalog maintained by administrators. The coverage amount claim name is
/// all lowercase on the wire, unlike the camel-cased policy records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyCatalogEntry {
    /// The unique identifier (numeric) of the catalog entry.
    #[serde(default)]
    pub id: Option<u64>,
    /// The display name of the product.
    pub name: String,
    /// The product category, e.g. health or auto.
    #[serde(rename = "policyType")]
    pub policy_type: String,
    /// The premium charged for the product.
    #[serde(rename = "premiumAmount")]
    pub premium_amount: f64,
    /// The insured amount.
    #[serde(rename = "coverageamount")]
    pub coverage_amount: f64,
    /// The human-readable coverage description.
    #[serde(rename = "coverageDetails")]
    pub coverage_details: String,
}

/// `CreatePolicy` is the payload sent when a customer buys a product from
/// the catalog, turning it into a held policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePolicy {
    /// The buying customer.
    #[serde(rename = "customerId")]
    pub customer_id: u64,
    /// The display name of the policy.
    pub name: String,
    /// The product category.
    #[serde(rename = "policyType")]
    pub policy_type: String,
    /// The premium paid by the customer.
    #[serde(rename = "premiumAmount")]
    pub premium_amount: f64,
    /// The insured amount.
    #[serde(rename = "coverageAmount")]
    pub coverage_amount: f64,
    /// The human-readable coverage description.
    #[serde(rename = "coverageDetails")]
    pub coverage_details: String,
    /// The validity in years.
    #[serde(rename = "validityPeriod")]
    pub validity_period: u32,
}
