//! TokenHub Server — Asset Tokenization Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tokenhub_core::config::AppConfig;
use tokenhub_core::error::AppError;
use tokenhub_database::repositories::asset::AssetRepository;
use tokenhub_database::repositories::member::MemberRepository;
use tokenhub_database::repositories::organization::OrganizationRepository;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TOKENHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TokenHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = tokenhub_database::DatabasePool::connect(&config.database).await?;

    tokenhub_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize object storage ────────────────────────
    tracing::info!(
        "Initializing object storage (provider: {})...",
        config.storage.provider
    );
    let media = Arc::new(tokenhub_storage::MediaStore::from_config(&config.storage).await?);

    // ── Step 3: Initialize pinning client ────────────────────────
    let pinning = Arc::new(tokenhub_pinning::PinningClient::new(&config.pinning));

    // ── Step 4: Initialize repositories ──────────────────────────
    let asset_repo = Arc::new(AssetRepository::new(db.pool().clone()));
    let organization_repo = Arc::new(OrganizationRepository::new(db.pool().clone()));
    let member_repo = Arc::new(MemberRepository::new(db.pool().clone()));

    // ── Step 5: Initialize services ──────────────────────────────
    tracing::info!("Initializing services...");
    let asset_service = Arc::new(tokenhub_service::AssetService::new(
        Arc::clone(&asset_repo),
        Arc::clone(&media),
    ));
    let tokenize_service = Arc::new(tokenhub_service::TokenizeService::new(
        Arc::clone(&asset_repo),
        Arc::clone(&pinning),
        reqwest::Client::new(),
    ));
    let organization_service = Arc::new(tokenhub_service::OrganizationService::new(
        Arc::clone(&organization_repo),
        Arc::clone(&member_repo),
        Arc::clone(&media),
    ));
    tracing::info!("Services initialized");

    // ── Step 6: Build and start HTTP server ──────────────────────
    let app_state = tokenhub_api::AppState {
        // Configuration
        config: Arc::new(config.clone()),

        // Infrastructure
        db_pool: db.pool().clone(),
        media: Arc::clone(&media),

        // Services
        asset_service,
        tokenize_service,
        organization_service,
    };

    let app = tokenhub_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("TokenHub server listening on {addr}");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("TokenHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
