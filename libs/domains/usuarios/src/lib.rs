//! Usuarios Domain
//!
//! This module provides a complete domain implementation for usuario
//! registration and management with uniqueness-checked writes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules: field validation, uniqueness checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_usuarios::{
//!     handlers,
//!     repository::InMemoryUsuarioRepository,
//!     service::UsuarioService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryUsuarioRepository::new();
//! let service = UsuarioService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UsuarioError, UsuarioResult};
pub use models::{CreateUsuario, RolRef, UpdateUsuario, Usuario};
pub use postgres::PgUsuarioRepository;
pub use repository::{InMemoryUsuarioRepository, UsuarioRepository};
pub use service::UsuarioService;
