use crate::auth::defaults::*;
use crate::error::CoveraError;
use crate::models::role::Role;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};

/// `Register` command is used to sign up a new customer account.
/// It has additional payload:
/// - `name` - full name, must be between 3 and 50 characters long.
/// - `email` - login email, must contain `@` and fit the length limits.
/// - `password` - password, must be between 3 and 100 characters long.
/// - `gender` - declared gender.
/// - `date` - date of birth, as an ISO date string.
/// - `aadhar_number` - national identity number.
/// - `phone` - contact phone number.
/// - `address` - postal address.
/// - `role` - requested role, `CUSTOMER` for self-service signup.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Register {
    /// Full name, must be between 3 and 50 characters long.
    pub name: String,
    /// Login email, must contain `@` and fit the length limits.
    pub email: String,
    /// Password, must be between 3 and 100 characters long.
    pub password: String,
    /// Declared gender.
    pub gender: String,
    /// Date of birth, as an ISO date string.
    pub date: String,
    /// National identity number.
    #[serde(rename = "aadharnumber")]
    pub aadhar_number: u64,
    /// Contact phone number.
    pub phone: u64,
    /// Postal address.
    pub address: String,
    /// Requested role, `CUSTOMER` for self-service signup.
    pub role: Role,
}

impl Validatable<CoveraError> for Register {
    fn validate(&self) -> Result<(), CoveraError> {
        if self.name.len() < MIN_NAME_LENGTH || self.name.len() > MAX_NAME_LENGTH {
            return Err(CoveraError::InvalidName);
        }

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
