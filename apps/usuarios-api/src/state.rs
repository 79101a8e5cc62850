//! Application state management.
//!
//! The shared state passed to request handlers: configuration and the
//! PostgreSQL connection pool (cheap to clone, shares the underlying pool).

use crate::config::Config;
use database::postgres::DatabaseConnection;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
