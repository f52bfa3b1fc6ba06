//! Foster Income Survey server
//!
//! Main entry point for the survey collection service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foster_api::{AppState, create_router};
use foster_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foster=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to the record store. A failed connection leaves the service
    // running in a degraded mode where write endpoints reject requests.
    let db = match foster_db::connect(&config.database).await {
        Ok(db) => {
            info!(
                database = config.database.database_name().unwrap_or("<unnamed>"),
                "Connected to record store"
            );
            Some(Arc::new(db))
        }
        Err(e) => {
            warn!(error = %e, "Record store unreachable; running degraded");
            None
        }
    };

    // Create application state
    let state = AppState { db };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
