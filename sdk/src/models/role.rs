use crate::error::CoveraError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// `Role` represents the coarse-grained user category controlling which
/// views are reachable.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Default, Clone, Copy, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Platform administrator with access to every resource.
    Admin,
    /// Insurance agent handling assigned customers and claims.
    Agent,
    /// End customer holding policies.
    #[default]
    Customer,
}

impl FromStr for Role {
    type Err = CoveraError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // The backend historically issued both CUSTOMER and USER for the
        // same category.
        match input.to_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "AGENT" => Ok(Role::Agent),
            "CUSTOMER" | "USER" => Ok(Role::Customer),
            _ => Err(CoveraError::InvalidRole),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Agent => write!(f, "AGENT"),
            Role::Customer => write!(f, "CUSTOMER"),
        }
    }
}

impl Role {
    /// Returns the path segment used by the notification endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Customer => "customer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_roles_case_insensitively() {
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("agent").unwrap(), Role::Agent);
        assert_eq!(Role::from_str("Customer").unwrap(), Role::Customer);
    }

    #[test]
    fn should_map_user_to_customer() {
        assert_eq!(Role::from_str("USER").unwrap(), Role::Customer);
    }

    #[test]
    fn should_reject_unknown_role() {
        let result = Role::from_str("MANAGER");
        assert!(matches!(result, Err(CoveraError::InvalidRole)));
    }
}
