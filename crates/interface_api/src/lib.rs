//! HTTP API Layer
//!
//! This crate provides the REST API for the unit trust administration
//! core using Axum.
//!
//! # Architecture
//!
//! - **State**: one `TrustStore` behind a `tokio::sync::RwLock`
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, seed::demo_store};
//!
//! let app = create_router(demo_store()?, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;
pub mod state;

use axum::{
    Router,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{health, metrics, registry, requests, statements, transactions};

pub use crate::state::{AppState, TrustStore};

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Initial trust data
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: TrustStore, config: ApiConfig) -> Router {
    router_with_state(AppState::new(store, config))
}

/// Creates the router over existing shared state
pub fn router_with_state(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Registry routes
    let unit_class_routes = Router::new()
        .route("/", get(registry::list_unit_classes))
        .route("/:id/price", put(registry::set_unit_price));

    let investor_routes = Router::new()
        .route("/", get(registry::list_investors).post(registry::create_investor))
        .route("/:id", get(registry::get_investor));

    let asset_routes = Router::new()
        .route("/", get(registry::list_assets));

    // Bookkeeping routes
    let transaction_routes = Router::new()
        .route("/", get(transactions::list_transactions).post(transactions::record_transaction))
        .route("/:id/status", put(transactions::update_status));

    // Request ledger routes
    let request_routes = Router::new()
        .route("/", get(requests::list_requests))
        .route("/pending", get(requests::list_pending))
        .route("/purchases", post(requests::submit_purchase))
        .route("/redemptions", post(requests::submit_redemption))
        .route("/transfers", post(requests::submit_transfer))
        .route("/shares", post(requests::submit_shares))
        .route("/:id", get(requests::get_request))
        .route("/:id/approve", post(requests::approve_request))
        .route("/:id/reject", post(requests::reject_request));

    // Aggregates and statements
    let metrics_routes = Router::new()
        .route("/summary", get(metrics::summary))
        .route("/gst", get(metrics::gst))
        .route("/property", post(metrics::property));

    let statement_routes = Router::new()
        .route("/", post(statements::generate_statement));

    let api_routes = Router::new()
        .nest("/unit-classes", unit_class_routes)
        .nest("/investors", investor_routes)
        .nest("/assets", asset_routes)
        .nest("/transactions", transaction_routes)
        .nest("/requests", request_routes)
        .nest("/metrics", metrics_routes)
        .nest("/statements", statement_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
