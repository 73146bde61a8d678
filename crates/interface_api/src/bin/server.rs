//! Unit Trust Administration - API Server Binary
//!
//! This binary starts the HTTP API server over an in-memory trust store.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration and the demonstration data set
//! cargo run --bin trust-admin-api
//!
//! # Run with environment variables
//! TRUST_PORT=9000 TRUST_SEED_DEMO_DATA=false cargo run --bin trust-admin-api
//! ```
//!
//! # Environment Variables
//!
//! * `TRUST_HOST` - Server host (default: 0.0.0.0)
//! * `TRUST_PORT` - Server port (default: 8080)
//! * `TRUST_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `TRUST_JSON_LOGS` - Emit JSON log lines (default: false)
//! * `TRUST_TIMEZONE` - IANA zone for statement timestamps (default: Australia/Sydney)
//! * `TRUST_SEED_DEMO_DATA` - Load the demonstration data set (default: true)
//! * `TRUST_BRANDING__COMPANY_NAME`, `TRUST_BRANDING__ABN`, ... - Statement branding

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router, seed::demo_store, TrustStore};
use core_kernel::Currency;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, builds the trust store and
/// starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration values in the environment are invalid
/// - The demonstration data set fails to load
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid TRUST_* configuration")?;

    init_tracing(&config.log_level, config.json_logs);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        timezone = %config.timezone.name(),
        "Starting Unit Trust Administration API Server"
    );

    let store = if config.seed_demo_data {
        let store = demo_store().context("failed to load demonstration data")?;
        tracing::info!(
            unit_classes = store.registry().unit_classes().len(),
            investors = store.registry().investors().len(),
            requests = store.ledger().len(),
            "Demonstration data loaded"
        );
        store
    } else {
        TrustStore::new(Currency::AUD)
    };

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    let app = create_router(store, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// In-flight requests complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
