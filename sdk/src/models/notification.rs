use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use strum::{Display as StrumDisplay, EnumString};

/// `Notification` represents a server-owned business event addressed to a
/// customer or an agent.
/// It consists of the following fields:
/// - `id`: the unique identifier (numeric) of the notification.
/// - `kind`: the type tag of the notification.
/// - `message`: the human-readable content.
/// - `customer_id`: the addressee when the notification targets a customer.
/// - `agent_id`: the addressee when the notification targets an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// The unique identifier (numeric) of the notification.
    pub id: u64,
    /// The type tag of the notification.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// The human-readable content.
    pub message: String,
    /// The addressee when the notification targets a customer.
    #[serde(rename = "customerId", default)]
    pub customer_id: Option<u64>,
    /// The addressee when the notification targets an agent.
    #[serde(rename = "agentId", default)]
    pub agent_id: Option<u64>,
}

/// `NotificationKind` is the type tag issued by the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NotificationKind {
    Policy,
    Claim,
    Payment,
    Alert,
    Info,
    Success,
    Warning,
    Error,
    Reminder,
    Update,
}

/// `Recipient` identifies whose notifications are fetched: a role together
/// with the matching entity id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient {
    pub role: Role,
    pub entity_id: u64,
}

impl Recipient {
    pub fn new(role: Role, entity_id: u64) -> Self {
        Self { role, entity_id }
    }
}

impl Display for Recipient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.role.path_segment(), self.entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_deserialize_notification_with_type_tag() {
        let json = r#"{"id":1,"type":"claim","message":"Claim approved","customerId":7}"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, 1);
        assert_eq!(notification.kind, NotificationKind::Claim);
        assert_eq!(notification.customer_id, Some(7));
        assert_eq!(notification.agent_id, None);
    }

    #[test]
    fn should_parse_kind_case_insensitively() {
        assert_eq!(
            NotificationKind::from_str("REMINDER").unwrap(),
            NotificationKind::Reminder
        );
    }

    #[test]
    fn should_format_recipient_as_path() {
        let recipient = Recipient::new(Role::Agent, 42);
        assert_eq!(recipient.to_string(), "agent/42");
    }
}
