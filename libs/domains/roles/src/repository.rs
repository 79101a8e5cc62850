use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::RolResult;
use crate::models::Rol;

/// Repository trait for Rol persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RolRepository: Send + Sync {
    /// Save a rol (insert when it has no id, full replace otherwise)
    async fn save(&self, rol: Rol) -> RolResult<Rol>;

    /// Get all roles
    async fn find_all(&self) -> RolResult<Vec<Rol>>;

    /// Get a rol by ID
    async fn find_by_id(&self, id: i32) -> RolResult<Option<Rol>>;

    /// Delete a rol by ID (no-op when absent)
    async fn delete_by_id(&self, id: i32) -> RolResult<()>;
}

/// In-memory implementation of RolRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryRolRepository {
    roles: Arc<RwLock<HashMap<i32, Rol>>>,
}

impl InMemoryRolRepository {
    pub fn new() -> Self {
        Self {
            roles: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl RolRepository for InMemoryRolRepository {
    async fn save(&self, mut rol: Rol) -> RolResult<Rol> {
        let mut roles = self.roles.write().await;

        let now = Utc::now();
        let id = match rol.id {
            Some(id) => {
                rol.date_modified = Some(now);
                id
            }
            None => {
                let next_id = roles.keys().max().copied().unwrap_or(0) + 1;
                rol.id = Some(next_id);
                rol.date_created = Some(now);
                rol.date_modified = Some(now);
                next_id
            }
        };

        roles.insert(id, rol.clone());

        tracing::info!(rol_id = id, nombre = %rol.nombre, "Saved rol");
        Ok(rol)
    }

    async fn find_all(&self) -> RolResult<Vec<Rol>> {
        let roles = self.roles.read().await;

        let mut result: Vec<Rol> = roles.values().cloned().collect();
        result.sort_by_key(|r| r.id);

        Ok(result)
    }

    async fn find_by_id(&self, id: i32) -> RolResult<Option<Rol>> {
        let roles = self.roles.read().await;
        Ok(roles.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> RolResult<()> {
        let mut roles = self.roles.write().await;

        if roles.remove(&id).is_some() {
            tracing::info!(rol_id = id, "Deleted rol");
        }

        Ok(())
    }
}
