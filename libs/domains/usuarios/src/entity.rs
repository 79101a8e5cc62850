use domain_roles::Rol;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM entity for the `usuario` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombres: String,
    pub apellidos: String,
    pub fecha_nacimiento: Date,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub documento_identidad: String,
    pub telefono: String,
    #[sea_orm(column_type = "Text")]
    pub direccion: String,
    #[sea_orm(column_type = "Double")]
    pub salario_base: f64,
    pub id_rol: i32,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
    pub date_created: Option<DateTimeWithTimeZone>,
    pub date_modified: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Usuario. The embedded rol carries
// only its id here; the adapter re-hydrates it from the rol table.
impl From<Model> for crate::models::Usuario {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            nombres: model.nombres,
            apellidos: model.apellidos,
            fecha_nacimiento: model.fecha_nacimiento,
            email: model.email,
            documento_identidad: model.documento_identidad,
            telefono: model.telefono,
            direccion: model.direccion,
            salario_base: model.salario_base,
            rol: Rol::with_id(model.id_rol),
            created_by: model.created_by,
            modified_by: model.modified_by,
            date_created: model.date_created.map(Into::into),
            date_modified: model.date_modified.map(Into::into),
        }
    }
}

// Conversion from domain Usuario to Sea-ORM ActiveModel. The id stays NotSet
// for new records so the database assigns it. The rol is persisted by id only.
impl From<crate::models::Usuario> for ActiveModel {
    fn from(usuario: crate::models::Usuario) -> Self {
        ActiveModel {
            id: match usuario.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            nombres: Set(usuario.nombres),
            apellidos: Set(usuario.apellidos),
            fecha_nacimiento: Set(usuario.fecha_nacimiento),
            email: Set(usuario.email),
            documento_identidad: Set(usuario.documento_identidad),
            telefono: Set(usuario.telefono),
            direccion: Set(usuario.direccion),
            salario_base: Set(usuario.salario_base),
            id_rol: Set(usuario.rol.id.unwrap_or_default()),
            created_by: Set(usuario.created_by),
            modified_by: Set(usuario.modified_by),
            date_created: Set(usuario.date_created.map(Into::into)),
            date_modified: Set(usuario.date_modified.map(Into::into)),
        }
    }
}
