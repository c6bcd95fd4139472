//! Error types shared across crates

use thiserror::Error;

/// Authentication error types
///
/// Display strings are the messages returned to API clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Login falhou")]
    InvalidCredentials,

    #[error("Token ausente!")]
    MissingToken,

    #[error("Token inválido!")]
    InvalidToken,

    #[error("Token inválido!")]
    TokenExpired,
}

impl AuthError {
    /// True for failures of the token gate, as opposed to a failed login
    pub fn is_token_error(&self) -> bool {
        !matches!(self, AuthError::InvalidCredentials)
    }
}
