//! Token gate middleware
//!
//! Attached with `route_layer` to the protected route table in
//! [`crate::routes`]. The token travels in the `token` query parameter,
//! not in a header.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, Request, State},
    middleware::Next,
    response::Response,
};
use provider_registry_shared::AuthError;
use serde::Deserialize;
use tracing::debug;

/// Query string carrying the token
#[derive(Debug, Default, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Operator authenticated by the token gate
///
/// Inserted into request extensions for protected handlers.
#[derive(Debug, Clone)]
pub struct Operator {
    pub user: String,
}

/// Reject the request with 403 unless `?token=` carries a valid token
pub async fn require_token(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let query = Query::<TokenQuery>::try_from_uri(request.uri())
        .map(|Query(q)| q)
        .map_err(|_| AuthError::InvalidToken)?;

    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens().validate(&token).map_err(|e| {
        debug!(error = %e, path = %request.uri().path(), "Token rejected");
        e
    })?;

    request.extensions_mut().insert(Operator { user: claims.user });

    Ok(next.run(request).await)
}
