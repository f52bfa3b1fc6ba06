//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The survey form and submission routes
//! - The health check endpoint
//! - Shared application state

pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// The connection is `None` when the record store was unreachable at
/// startup; the process keeps running in a degraded mode where write
/// endpoints reject requests.
#[derive(Clone, Default)]
pub struct AppState {
    /// Record store connection pool, absent in degraded mode.
    pub db: Option<Arc<DatabaseConnection>>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
