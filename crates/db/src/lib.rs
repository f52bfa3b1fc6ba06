//! Record store layer for the Foster Income Survey.
//!
//! This crate provides:
//! - The `SeaORM` entity for stored survey responses
//! - The repository abstraction for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::SurveyRepository;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use foster_shared::config::DatabaseConfig;

/// Establishes a connection to the record store.
///
/// A single connection attempt with a bounded timeout; no retry or backoff.
///
/// # Errors
///
/// Returns an error if the connection cannot be established within the
/// configured timeout.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .max_connections(config.max_connections);

    Database::connect(options).await
}
