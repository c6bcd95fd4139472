//! Route definitions for the Provider Registry API
//!
//! The route table is split in two: public routes, and routes behind the
//! token gate. Which side an endpoint sits on is part of the API contract;
//! service and category creation are public while provider writes and all
//! deletes require a token.

use crate::auth::require_token;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod categories;
mod extract;
mod health;
mod providers;
mod services;
mod setup;


pub use extract::{ApiJson, ApiPath};

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes open to anyone
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/setup", get(setup::setup))
        .route("/prestador", get(providers::list_providers))
        .route(
            "/prestador/categoria/:id",
            get(providers::list_providers_by_category),
        )
        .route(
            "/prestador/servico/:nome",
            get(providers::list_providers_by_service),
        )
        .route("/servico", post(services::create_service))
        .route(
            "/categoria",
            get(categories::list_categories).post(categories::create_category),
        )
}

/// Routes that require `?token=`
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/prestador", post(providers::create_provider))
        .route(
            "/prestador/:id",
            put(providers::update_provider).delete(providers::delete_provider),
        )
        .route("/servico/:id", delete(services::delete_service))
        .route("/categoria/:id", delete(categories::delete_category))
        .route_layer(middleware::from_fn_with_state(state, require_token))
}
