use serde::{Deserialize, Serialize};

/// `Customer` represents an end customer profile as stored by the backend.
/// It consists of the following fields:
/// - `customer_id`: the unique identifier (numeric) of the customer.
/// - `name`: the full name of the customer.
/// - `email`: the login email of the customer.
/// - `gender`: the declared gender.
/// - `date`: the date of birth, as an ISO date string.
/// - `aadhar_number`: the national identity number.
/// - `phone`: the contact phone number.
/// - `address`: the postal address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// The unique identifier (numeric) of the customer.
    #[serde(rename = "customerId")]
    pub customer_id: u64,
    /// The full name of the customer.
    pub name: String,
    /// The login email of the customer.
    pub email: String,
    /// The declared gender.
    pub gender: String,
    /// The date of birth, as an ISO date string.
    pub date: String,
    /// The national identity number.
    #[serde(rename = "aadharnumber")]
    pub aadhar_number: u64,
    /// The contact phone number.
    pub phone: u64,
    /// The postal address.
    pub address: String,
}
