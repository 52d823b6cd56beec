//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{DetailedHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/health/detailed
pub async fn health_detailed(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(_) => "unreachable",
    };

    let storage = match state.media.health_check().await {
        Ok(true) => "available",
        _ => "unreachable",
    };

    let status = if database == "connected" && storage == "available" {
        "ok"
    } else {
        "degraded"
    };

    Json(DetailedHealthResponse {
        status: status.to_string(),
        database: database.to_string(),
        storage: storage.to_string(),
    })
}
