//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use tokenhub_core::config::AppConfig;
use tokenhub_service::{AssetService, OrganizationService, TokenizeService};
use tokenhub_storage::media::MediaStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Media store backing image uploads
    pub media: Arc<MediaStore>,

    // ── Services ─────────────────────────────────────────────
    /// Asset submission and lookups
    pub asset_service: Arc<AssetService>,
    /// Tokenization pipeline
    pub tokenize_service: Arc<TokenizeService>,
    /// Organization lifecycle and membership
    pub organization_service: Arc<OrganizationService>,
}
