use chrono::{DateTime, Local, NaiveDate, Utc};
use domain_roles::Rol;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Letters (including Spanish accents) and spaces
static LETRAS_Y_ESPACIOS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ ]+$").unwrap());

/// Identity document: digits only, 5 to 20 of them
static DOCUMENTO_IDENTIDAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5,20}$").unwrap());

/// Phone number: digits only, 7 to 15 of them
static TELEFONO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{7,15}$").unwrap());

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn validate_nombres(nombres: &str) -> Result<(), ValidationError> {
    if !LETRAS_Y_ESPACIOS.is_match(nombres) {
        return Err(validation_error(
            "nombres_invalidos",
            "Los nombres solo deben contener letras y espacios",
        ));
    }
    Ok(())
}

fn validate_apellidos(apellidos: &str) -> Result<(), ValidationError> {
    if !LETRAS_Y_ESPACIOS.is_match(apellidos) {
        return Err(validation_error(
            "apellidos_invalidos",
            "Los apellidos solo deben contener letras y espacios",
        ));
    }
    Ok(())
}

fn validate_documento_identidad(documento: &str) -> Result<(), ValidationError> {
    if !DOCUMENTO_IDENTIDAD.is_match(documento) {
        return Err(validation_error(
            "documento_invalido",
            "El documento de identidad debe contener solo números y tener entre 5 y 20 dígitos",
        ));
    }
    Ok(())
}

fn validate_telefono(telefono: &str) -> Result<(), ValidationError> {
    if !TELEFONO.is_match(telefono) {
        return Err(validation_error(
            "telefono_invalido",
            "El teléfono debe contener solo números y tener entre 7 y 15 dígitos",
        ));
    }
    Ok(())
}

fn validate_fecha_nacimiento(fecha: &NaiveDate) -> Result<(), ValidationError> {
    // Day granularity in the local system timezone
    if *fecha > Local::now().date_naive() {
        return Err(validation_error(
            "fecha_futura",
            "La fecha de nacimiento no puede ser futura",
        ));
    }
    Ok(())
}

/// Usuario entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Usuario {
    /// Unique identifier (assigned by storage on creation, immutable after)
    pub id: Option<i32>,
    /// Given names
    pub nombres: String,
    /// Surnames
    pub apellidos: String,
    /// Date of birth
    pub fecha_nacimiento: NaiveDate,
    /// Email address (unique across all usuarios)
    pub email: String,
    /// Identity document number (unique across all usuarios)
    pub documento_identidad: String,
    /// Phone number
    pub telefono: String,
    /// Address
    pub direccion: String,
    /// Base salary
    pub salario_base: f64,
    /// Associated rol (embedded projection, re-hydrated by the storage adapter)
    pub rol: Rol,
    /// Audit: creator, set by the storage layer
    pub created_by: Option<String>,
    /// Audit: last modifier, set by the storage layer
    pub modified_by: Option<String>,
    /// Audit: creation timestamp, set by the storage layer
    pub date_created: Option<DateTime<Utc>>,
    /// Audit: last modification timestamp, set by the storage layer
    pub date_modified: Option<DateTime<Utc>>,
}

/// Rol reference carried by the usuario DTOs
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RolRef {
    pub id: i32,
}

/// DTO for registering a new usuario
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUsuario {
    #[validate(
        length(min = 1, message = "El nombre no puede estar vacío"),
        custom(function = "validate_nombres")
    )]
    pub nombres: String,
    #[validate(
        length(min = 1, message = "Los apellidos no pueden estar vacíos"),
        custom(function = "validate_apellidos")
    )]
    pub apellidos: String,
    #[validate(custom(function = "validate_fecha_nacimiento"))]
    pub fecha_nacimiento: NaiveDate,
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(custom(function = "validate_documento_identidad"))]
    pub documento_identidad: String,
    #[validate(custom(function = "validate_telefono"))]
    pub telefono: String,
    #[validate(length(min = 1, message = "La dirección no puede estar vacía"))]
    pub direccion: String,
    #[validate(range(
        min = 0.0,
        max = 15000000.0,
        message = "El salario base debe estar entre 0 y 15,000,000"
    ))]
    pub salario_base: f64,
    #[validate(nested)]
    pub rol: RolRef,
}

/// DTO for updating an existing usuario (full replacement, carries its id)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuario {
    pub id: i32,
    #[validate(
        length(min = 1, message = "El nombre no puede estar vacío"),
        custom(function = "validate_nombres")
    )]
    pub nombres: String,
    #[validate(
        length(min = 1, message = "Los apellidos no pueden estar vacíos"),
        custom(function = "validate_apellidos")
    )]
    pub apellidos: String,
    #[validate(custom(function = "validate_fecha_nacimiento"))]
    pub fecha_nacimiento: NaiveDate,
    #[validate(email(message = "El email no es válido"))]
    pub email: String,
    #[validate(custom(function = "validate_documento_identidad"))]
    pub documento_identidad: String,
    #[validate(custom(function = "validate_telefono"))]
    pub telefono: String,
    #[validate(length(min = 1, message = "La dirección no puede estar vacía"))]
    pub direccion: String,
    #[validate(range(
        min = 0.0,
        max = 15000000.0,
        message = "El salario base debe estar entre 0 y 15,000,000"
    ))]
    pub salario_base: f64,
    #[validate(nested)]
    pub rol: RolRef,
}

impl From<CreateUsuario> for Usuario {
    fn from(input: CreateUsuario) -> Self {
        Self {
            id: None,
            nombres: input.nombres,
            apellidos: input.apellidos,
            fecha_nacimiento: input.fecha_nacimiento,
            email: input.email,
            documento_identidad: input.documento_identidad,
            telefono: input.telefono,
            direccion: input.direccion,
            salario_base: input.salario_base,
            rol: Rol::with_id(input.rol.id),
            created_by: None,
            modified_by: None,
            date_created: None,
            date_modified: None,
        }
    }
}

impl From<UpdateUsuario> for Usuario {
    fn from(input: UpdateUsuario) -> Self {
        Self {
            id: Some(input.id),
            nombres: input.nombres,
            apellidos: input.apellidos,
            fecha_nacimiento: input.fecha_nacimiento,
            email: input.email,
            documento_identidad: input.documento_identidad,
            telefono: input.telefono,
            direccion: input.direccion,
            salario_base: input.salario_base,
            rol: Rol::with_id(input.rol.id),
            created_by: None,
            modified_by: None,
            date_created: None,
            date_modified: None,
        }
    }
}
