//! Route definitions for the TokenHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tokenhub_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(asset_routes())
        .merge(organization_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .fallback(unknown_route)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Asset submission, lookup, and tokenization endpoints
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/assets", post(handlers::asset::create_asset))
        .route(
            "/assets/creator/{user_id}",
            get(handlers::asset::list_by_creator),
        )
        .route("/assets/{id}", get(handlers::asset::get_asset))
        .route("/assets/tokenize", post(handlers::asset::tokenize_asset))
        .route(
            "/assets/tokenize/complete",
            post(handlers::asset::complete_tokenization),
        )
}

/// Organization lifecycle and membership endpoints
fn organization_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/organizations",
            post(handlers::organization::create_organization),
        )
        .route(
            "/organizations/{id}",
            get(handlers::organization::get_organization),
        )
        .route(
            "/organizations/user/{email}",
            get(handlers::organization::list_for_user),
        )
        .route(
            "/organizations/{id}/users",
            get(handlers::organization::list_members),
        )
        .route(
            "/organizations/admin/{email}",
            get(handlers::organization::list_administered),
        )
        .route(
            "/organizations/{id}/assets",
            get(handlers::organization::list_assets),
        )
        .route(
            "/organizations/{id}/invite",
            post(handlers::organization::invite_member),
        )
        .route(
            "/organizations/{id}/leave",
            post(handlers::organization::leave_organization),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Fallback for unmatched paths.
async fn unknown_route() -> ApiError {
    ApiError::from(AppError::not_found("Route not found"))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors
}
