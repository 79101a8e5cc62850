//! Roles Domain
//!
//! Rol records are referenced by usuarios and read-only from the usuario
//! flow: the usuario persistence adapter re-hydrates the embedded rol by id
//! so responses always reflect stored data.

pub mod entity;
pub mod error;
pub mod models;
pub mod postgres;
pub mod repository;

// Re-export commonly used types
pub use error::{RolError, RolResult};
pub use models::Rol;
pub use postgres::PgRolRepository;
pub use repository::{InMemoryRolRepository, RolRepository};
