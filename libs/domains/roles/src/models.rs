use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rol entity referenced by usuarios
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rol {
    /// Unique identifier (assigned by storage)
    pub id: Option<i32>,
    /// Role name (e.g. "CLIENTE", "ADMIN")
    pub nombre: String,
    /// Role description
    pub descripcion: String,
    /// Audit: creator, set by the storage layer
    pub created_by: Option<String>,
    /// Audit: last modifier, set by the storage layer
    pub modified_by: Option<String>,
    /// Audit: creation timestamp, set by the storage layer
    pub date_created: Option<DateTime<Utc>>,
    /// Audit: last modification timestamp, set by the storage layer
    pub date_modified: Option<DateTime<Utc>>,
}

impl Rol {
    /// A rol carrying only its id, to be re-hydrated by the storage adapter.
    pub fn with_id(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}
