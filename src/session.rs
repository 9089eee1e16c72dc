//! Operator session passed explicitly to the dashboard.
//! The sign-in check is a cosmetic gate; it is not access control.

use serde::Serialize;
use thiserror::Error;

const MIN_CREDENTIAL_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("username must be at least 3 characters")]
    UsernameTooShort,

    #[error("passcode must be at least 3 characters")]
    PasscodeTooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    operator: String,
}

impl Session {
    pub fn sign_in(username: &str, passcode: &str) -> Result<Self, SessionError> {
        if username.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(SessionError::UsernameTooShort);
        }
        if passcode.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(SessionError::PasscodeTooShort);
        }
        tracing::info!(operator = %username, "operator signed in");
        Ok(Self {
            operator: username.to_string(),
        })
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }
}
