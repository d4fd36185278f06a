//! Operator sign-in.
//!
//! Only the login form consults an [`Authenticator`]; no session is issued and
//! later requests are not checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Username/password pair submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The operator an [`Authenticator`] vouched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
}

/// Pluggable credential check.
pub trait Authenticator: Send + Sync {
    /// Verify credentials, returning the signed-in principal.
    fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}

/// A single configured operator account.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if credentials.username == self.username && credentials.password == self.password {
            Ok(Principal {
                username: credentials.username.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
