//! Operator credential check
//!
//! There are no user accounts: a single operator login is configured at
//! startup and compared verbatim.

use crate::config::AuthConfig;
use provider_registry_shared::AuthError;

/// The configured operator login
#[derive(Debug, Clone)]
pub struct OperatorCredentials<'a> {
    user: &'a str,
    password: &'a str,
}

impl<'a> OperatorCredentials<'a> {
    pub fn from_config(config: &'a AuthConfig) -> Self {
        Self {
            user: &config.operator_user,
            password: &config.operator_password,
        }
    }

    /// Check a submitted pair and return the authenticated user name
    pub fn verify(&self, user: Option<&str>, password: Option<&str>) -> Result<&'a str, AuthError> {
        match (user, password) {
            (Some(u), Some(p)) if u == self.user && p == self.password => Ok(self.user),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
