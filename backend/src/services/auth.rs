//! Operator login

use crate::auth::{OperatorCredentials, TokenService};
use crate::config::AuthConfig;
use crate::error::ApiError;
use provider_registry_shared::{LoginRequest, LoginResponse};
use tracing::{info, warn};

/// Login service
pub struct AuthService;

impl AuthService {
    /// Exchange the operator credentials for a signed token
    pub fn login(
        config: &AuthConfig,
        tokens: &TokenService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let user = OperatorCredentials::from_config(config)
            .verify(req.user.as_deref(), req.password.as_deref())
            .map_err(|e| {
                warn!(user = ?req.user, "Login rejected");
                e
            })?;

        let token = tokens.issue(user).map_err(ApiError::Internal)?;

        info!(user = %user, expires_in = tokens.expiry_secs(), "Token issued");
        Ok(LoginResponse { token })
    }
}
