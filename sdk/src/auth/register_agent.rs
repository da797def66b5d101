use crate::auth::defaults::*;
use crate::error::CoveraError;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `RegisterAgent` command is used by administrators to onboard an agent.
/// It has additional payload:
/// - `name` - full name, must be between 3 and 50 characters long.
/// - `org_email` - organization email used for agent login.
/// - `password` - password, must be between 3 and 100 characters long.
/// - `contact_info` - free-form contact details.
/// - `phone` - contact phone number.
/// - `address` - postal address.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterAgent {
    /// Full name, must be between 3 and 50 characters long.
    pub name: String,
    /// Organization email used for agent login.
    #[serde(rename = "orgEmail")]
    pub org_email: String,
    /// Password, must be between 3 and 100 characters long.
    pub password: String,
    /// Free-form contact details.
    #[serde(rename = "contactInfo", default)]
    pub contact_info: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<u64>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
}

impl Validatable<CoveraError> for RegisterAgent {
    fn validate(&self) -> Result<(), CoveraError> {
        if self.name.len() < MIN_NAME_LENGTH || self.name.len() > MAX_NAME_LENGTH {
            return Err(CoveraError::InvalidName);
        }

        if self.org_email.is_empty()
            || self.org_email.len() > MAX_EMAIL_LENGTH
            || !self.org_email.contains('@')
        {
            return Err(CoveraError::InvalidEmail);
        }

        if self.password.len() < MIN_PASSWORD_LENGTH || self.password.len() > MAX_PASSWORD_LENGTH {
            return Err(CoveraError::InvalidPassword);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_invalid_org_email() {
        let command = RegisterAgent {
            name: "John Smith".to_string(),
            org_email: "not-an-email".to_string(),
            password: "secret".to_string(),
            contact_info: None,
            phone: None,
            address: None,
        };
        assert!(matches!(command.validate(), Err(CoveraError::InvalidEmail)));
    }
}
