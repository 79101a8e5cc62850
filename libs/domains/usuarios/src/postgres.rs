use async_trait::async_trait;
use chrono::Utc;
use domain_roles::{PgRolRepository, RolRepository};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{UsuarioError, UsuarioResult},
    models::Usuario,
    repository::UsuarioRepository,
};

/// PostgreSQL implementation of UsuarioRepository using SeaORM
///
/// After every load or save the embedded rol is re-hydrated through the rol
/// repository so responses reflect stored data rather than the caller's copy.
#[derive(Clone)]
pub struct PgUsuarioRepository {
    db: DatabaseConnection,
    roles: PgRolRepository,
}

impl PgUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        let roles = PgRolRepository::new(db.clone());
        Self { db, roles }
    }

    async fn load_rol(&self, mut usuario: Usuario) -> UsuarioResult<Usuario> {
        if let Some(rol_id) = usuario.rol.id {
            let rol = self
                .roles
                .find_by_id(rol_id)
                .await
                .map_err(|e| UsuarioError::Repository(e.to_string()))?;

            if let Some(rol) = rol {
                usuario.rol = rol;
            }
        }

        Ok(usuario)
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn save(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        let is_update = usuario.id.is_some();

        let mut active_model: entity::ActiveModel = usuario.into();
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
            UsuarioError::Repository(format!(
                "Error guardando usuario en la base de datos: {}",
                e
            ))
        })?;

        tracing::info!(usuario_id = model.id, "Saved usuario");
        self.load_rol(model.into()).await
    }

    async fn find_all(&self) -> UsuarioResult<Vec<Usuario>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                UsuarioError::Repository(format!(
                    "Error buscando todos los usuarios en la base de datos: {}",
                    e
                ))
            })?;

        let mut usuarios = Vec::with_capacity(models.len());
        for model in models {
            usuarios.push(self.load_rol(model.into()).await?);
        }

        Ok(usuarios)
    }

    async fn find_by_id(&self, id: i32) -> UsuarioResult<Option<Usuario>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                UsuarioError::Repository(format!(
                    "Error buscando usuario por id en la base de datos: {}",
                    e
                ))
            })?;

        match model {
            Some(model) => Ok(Some(self.load_rol(model.into()).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> UsuarioResult<Option<Usuario>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                UsuarioError::Repository(format!(
                    "Error buscando usuario por email en la base de datos: {}",
                    e
                ))
            })?;

        match model {
            Some(model) => Ok(Some(self.load_rol(model.into()).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_documento_identidad(
        &self,
        documento_identidad: &str,
    ) -> UsuarioResult<Option<Usuario>> {
        let model = entity::Entity::find()
            .filter(entity::Column::DocumentoIdentidad.eq(documento_identidad))
            .one(&self.db)
            .await
            .map_err(|e| {
                UsuarioError::Repository(format!(
                    "Error buscando usuario por documento en la base de datos: {}",
                    e
                ))
            })?;

        match model {
            Some(model) => Ok(Some(self.load_rol(model.into()).await?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> UsuarioResult<()> {
        // Deleting an absent id affects zero rows, which is not an error
        entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                UsuarioError::Repository(format!(
                    "Error eliminando usuario por id en la base de datos: {}",
                    e
                ))
            })?;

        Ok(())
    }
}
