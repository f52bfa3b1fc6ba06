//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod survey;

/// Creates the router with all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(survey::routes())
}
