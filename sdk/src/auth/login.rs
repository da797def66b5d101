use crate::auth::defaults::*;
use crate::error::CoveraError;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `Login` command is used to sign in with email and password.
/// It has additional payload:
/// - `email` - login email, must contain `@` and fit the length limits.
/// - `password` - password, must be between 3 and 100 characters long.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Login {
    /// Login email, must contain `@` and fit the length limits.
    pub email: String,
    /// Password, must be between 3 and 100 characters long.
    pub password: String,
}

impl Login {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl Validatable<CoveraError> for Login {
    fn validate(&self) -> Result<(), CoveraError> {
        if self.email.is_empty() || self.email.len() > MAX_EMAIL_LENGTH || !self.email.contains('@')
        {
            return Err(CoveraError::InvalidEmail);
        }

        if self.password.len() < MIN_PASSWORD_LENGTH || self.password.len() > MAX_PASSWORD_LENGTH {
            return Err(CoveraError::InvalidPassword);
        }

        Ok(())
    }
}

impl Display for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.email)
    }
}
