use serde::{Deserialize, Serialize};

/// `SendMail` is the payload for the administrator mail dispatch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMail {
    /// The recipient email address.
    pub to: String,
    /// The mail subject line.
    pub subject: String,
    /// The mail body.
    pub body: String,
}

/// `SendSms` is the payload for the administrator SMS dispatch endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendSms {
    /// The recipient phone number.
    pub phone: u64,
    /// The message content.
    pub message: String,
}
