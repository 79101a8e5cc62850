use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{RolError, RolResult},
    models::Rol,
    repository::RolRepository,
};

/// PostgreSQL implementation of RolRepository using SeaORM
#[derive(Clone)]
pub struct PgRolRepository {
    db: DatabaseConnection,
}

impl PgRolRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RolRepository for PgRolRepository {
    async fn save(&self, rol: Rol) -> RolResult<Rol> {
        let is_update = rol.id.is_some();

        let mut active_model: entity::ActiveModel = rol.into();
        let now = Utc::now();
        if is_update {
            // Leave date_created untouched on replacement writes
            active_model.date_created = NotSet;
            active_model.date_modified = Set(Some(now.into()));
        } else {
            active_model.date_created = Set(Some(now.into()));
            active_model.date_modified = Set(Some(now.into()));
        }

        let model = if is_update {
            active_model.update(&self.db).await
        } else {
            active_model.insert(&self.db).await
        }
        .map_err(|e| {
            RolError::Repository(format!("Error guardando rol en la base de datos: {}", e))
        })?;

        tracing::info!(rol_id = model.id, "Saved rol");
        Ok(model.into())
    }

    async fn find_all(&self) -> RolResult<Vec<Rol>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                RolError::Repository(format!(
                    "Error buscando todos los roles en la base de datos: {}",
                    e
                ))
            })?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> RolResult<Option<Rol>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                RolError::Repository(format!(
                    "Error buscando rol por id en la base de datos: {}",
                    e
                ))
            })?;

        Ok(model.map(Into::into))
    }

    async fn delete_by_id(&self, id: i32) -> RolResult<()> {
        entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                RolError::Repository(format!(
                    "Error eliminando rol por id en la base de datos: {}",
                    e
                ))
            })?;

        Ok(())
    }
}
