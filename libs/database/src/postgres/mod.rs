//! PostgreSQL support built on SeaORM

pub mod config;
pub mod connector;
pub mod health;

// Re-export so consumers do not need a direct sea-orm dependency
pub use sea_orm::DatabaseConnection;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};
