//! Token generation and validation
//!
//! Tokens are HS256 JWTs carrying the operator name and an absolute expiry.
//! There is no revocation list and no refresh: expiry is the only way a
//! token stops working.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use provider_registry_shared::AuthError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Operator name
    pub user: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed signing keys, created once at startup
#[derive(Clone)]
struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Issues and verifies operator tokens
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    validation: Arc<Validation>,
    expiry_secs: i64,
}

impl TokenService {
    /// Create a token service; call once at startup and store in AppState
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No grace period once `exp` has passed
        validation.leeway = 0;

        Self {
            keys: TokenKeys::new(secret),
            validation: Arc::new(validation),
            expiry_secs,
        }
    }

    /// Issue a token for `user`, valid from now
    #[inline]
    pub fn issue(&self, user: &str) -> Result<String> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token for `user` as if it had been issued at `issued_at`
    pub fn issue_at(&self, user: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let exp = issued_at + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            user: user.to_string(),
            exp: exp.timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate token: {}", e))
    }

    /// Verify signature and expiry and return the claims
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Lifetime of issued tokens in seconds
    #[inline]
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }
}
