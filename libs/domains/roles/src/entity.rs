use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the `rol` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rol")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    #[sea_orm(column_type = "Text")]
    pub descripcion: String,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub date_created: Option<DateTimeWithTimeZone>,
    pub date_modified: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Rol
impl From<Model> for crate::models::Rol {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            nombre: model.nombre,
            descripcion: model.descripcion,
            created_by: model.created_by,
            modified_by: model.modified_by,
            date_created: model.date_created.map(Into::into),
            date_modified: model.date_modified.map(Into::into),
        }
    }
}

// Conversion from domain Rol to Sea-ORM ActiveModel. The id stays NotSet for
// new records so the database assigns it.
impl From<crate::models::Rol> for ActiveModel {
    fn from(rol: crate::models::Rol) -> Self {
        ActiveModel {
            id: match rol.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            nombre: Set(rol.nombre),
            descripcion: Set(rol.descripcion),
            created_by: Set(rol.created_by),
            modified_by: Set(rol.modified_by),
            date_created: Set(rol.date_created.map(Into::into)),
            date_modified: Set(rol.date_modified.map(Into::into)),
        }
    }
}
