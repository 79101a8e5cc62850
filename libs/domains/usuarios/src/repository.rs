use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::UsuarioResult;
use crate::models::Usuario;

/// Repository trait for Usuario persistence
///
/// This is the gateway consumed by the use case. Implementations can use
/// different storage backends (PostgreSQL, in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Save a usuario: insert when it has no id, full replace otherwise.
    /// Returns the persisted usuario with storage-assigned id and audit fields.
    async fn save(&self, usuario: Usuario) -> UsuarioResult<Usuario>;

    /// Get all usuarios
    async fn find_all(&self) -> UsuarioResult<Vec<Usuario>>;

    /// Get a usuario by ID
    async fn find_by_id(&self, id: i32) -> UsuarioResult<Option<Usuario>>;

    /// Get a usuario by email
    async fn find_by_email(&self, email: &str) -> UsuarioResult<Option<Usuario>>;

    /// Get a usuario by identity document
    async fn find_by_documento_identidad(
        &self,
        documento_identidad: &str,
    ) -> UsuarioResult<Option<Usuario>>;

    /// Delete a usuario by ID (no-op when absent)
    async fn delete_by_id(&self, id: i32) -> UsuarioResult<()>;
}

/// In-memory implementation of UsuarioRepository (for development/testing)
///
/// Mirrors the Postgres adapter's contract: it stores whatever it is given
/// and leaves uniqueness enforcement to the service.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUsuarioRepository {
    usuarios: Arc<RwLock<HashMap<i32, Usuario>>>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self {
            usuarios: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn save(&self, mut usuario: Usuario) -> UsuarioResult<Usuario> {
        let mut usuarios = self.usuarios.write().await;

        let now = Utc::now();
        let id = match usuario.id {
            Some(id) => {
                usuario.date_created = usuarios.get(&id).and_then(|u| u.date_created);
                usuario.date_modified = Some(now);
                id
            }
            None => {
                let next_id = usuarios.keys().max().copied().unwrap_or(0) + 1;
                usuario.id = Some(next_id);
                usuario.date_created = Some(now);
                usuario.date_modified = Some(now);
                next_id
            }
        };

        usuarios.insert(id, usuario.clone());

        tracing::info!(usuario_id = id, email = %usuario.email, "Saved usuario");
        Ok(usuario)
    }

    async fn find_all(&self) -> UsuarioResult<Vec<Usuario>> {
        let usuarios = self.usuarios.read().await;

        let mut result: Vec<Usuario> = usuarios.values().cloned().collect();
        result.sort_by_key(|u| u.id);

        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> UsuarioResult<Option<Usuario>> {
        let usuarios = self.usuarios.read().await;
        Ok(usuarios.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UsuarioResult<Option<Usuario>> {
        let usuarios = self.usuarios.read().await;
        let usuario = usuarios.values().find(|u| u.email == email).cloned();
        Ok(usuario)
    }

    async fn find_by_documento_identidad(
        &self,
        documento_identidad: &str,
    ) -> UsuarioResult<Option<Usuario>> {
        let usuarios = self.usuarios.read().await;
        let usuario = usuarios
            .values()
            .find(|u| u.documento_identidad == documento_identidad)
            .cloned();
        Ok(usuario)
    }

    async fn delete_by_id(&self, id: i32) -> UsuarioResult<()> {
        let mut usuarios = self.usuarios.write().await;

        if usuarios.remove(&id).is_some() {
            tracing::info!(usuario_id = id, "Deleted usuario");
        }

        Ok(())
    }
}
