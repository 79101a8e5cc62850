use regex::Regex;
use std::sync::Arc;
use std::sync::LazyLock;
use tracing::instrument;

use crate::error::{UsuarioError, UsuarioResult};
use crate::models::Usuario;
use crate::repository::UsuarioRepository;

/// Email pattern: local-part@domain with a 2-6 character TLD, case-insensitive
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9+_.-]+@[a-z0-9.-]+\.[a-z]{2,6}$").unwrap());

/// Service layer for Usuario business rules
///
/// Enforces field invariants and the email/documento uniqueness rules before
/// every write, then orchestrates persistence through the repository gateway.
#[derive(Clone)]
pub struct UsuarioService<R: UsuarioRepository> {
    repository: Arc<R>,
}

impl<R: UsuarioRepository> UsuarioService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new usuario.
    ///
    /// Field validation runs first (first failure wins), then the uniqueness
    /// checks run sequentially with short-circuit: the documento lookup only
    /// happens when the email lookup found nothing. On success exactly one
    /// write is performed.
    #[instrument(skip(self, usuario), fields(email = %usuario.email))]
    pub async fn save_usuario(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        validate_usuario(&usuario)?;

        if self.repository.find_by_email(&usuario.email).await?.is_some() {
            return Err(UsuarioError::EmailAlreadyExists(
                "El correo electrónico ya está registrado".to_string(),
            ));
        }

        if self
            .repository
            .find_by_documento_identidad(&usuario.documento_identidad)
            .await?
            .is_some()
        {
            return Err(UsuarioError::DocumentoAlreadyExists(
                "El documento de identidad ya está registrado".to_string(),
            ));
        }

        self.repository.save(usuario).await
    }

    /// Replace an existing usuario.
    ///
    /// The input must carry its id. Both uniqueness lookups run concurrently
    /// and are each scoped to records belonging to a DIFFERENT usuario: a
    /// match on the record being updated is always allowed.
    #[instrument(skip(self, usuario), fields(usuario_id = ?usuario.id))]
    pub async fn update_usuario(&self, usuario: Usuario) -> UsuarioResult<Usuario> {
        validate_usuario(&usuario)?;

        let id = usuario.id.ok_or_else(|| {
            UsuarioError::validation("id", "El id es obligatorio para actualizar un usuario")
        })?;

        let (email_match, documento_match) = tokio::join!(
            self.repository.find_by_email(&usuario.email),
            self.repository
                .find_by_documento_identidad(&usuario.documento_identidad),
        );

        if email_match?.is_some_and(|existing| existing.id != Some(id)) {
            return Err(UsuarioError::EmailAlreadyExists(
                "El correo electrónico ya está registrado por otro usuario".to_string(),
            ));
        }

        if documento_match?.is_some_and(|existing| existing.id != Some(id)) {
            return Err(UsuarioError::DocumentoAlreadyExists(
                "El documento de identidad ya está registrado por otro usuario".to_string(),
            ));
        }

        self.repository.save(usuario).await
    }

    /// Get all usuarios
    pub async fn get_all_usuarios(&self) -> UsuarioResult<Vec<Usuario>> {
        self.repository.find_all().await
    }

    /// Get a usuario by id. Absence is a valid outcome, not an error.
    #[instrument(skip(self))]
    pub async fn get_usuario_by_id(&self, id: i32) -> UsuarioResult<Option<Usuario>> {
        self.repository.find_by_id(id).await
    }

    /// Delete a usuario by id. Deleting an absent id completes without error.
    #[instrument(skip(self))]
    pub async fn delete_usuario(&self, id: i32) -> UsuarioResult<()> {
        self.repository.delete_by_id(id).await
    }
}

/// Field validation for writes, evaluated in order with first failure wins.
fn validate_usuario(usuario: &Usuario) -> UsuarioResult<()> {
    if usuario.nombres.trim().is_empty() {
        return Err(UsuarioError::validation(
            "nombres",
            "El nombre no puede estar vacío",
        ));
    }

    if usuario.apellidos.trim().is_empty() {
        return Err(UsuarioError::validation(
            "apellidos",
            "Los apellidos no pueden estar vacíos",
        ));
    }

    if usuario.email.trim().is_empty() {
        return Err(UsuarioError::validation(
            "email",
            "El email no puede estar vacío",
        ));
    }

    if !EMAIL.is_match(&usuario.email) {
        return Err(UsuarioError::validation("email", "El email no es válido"));
    }

    if usuario.documento_identidad.trim().is_empty() {
        return Err(UsuarioError::validation(
            "documento_identidad",
            "El documento de identidad no puede estar vacío",
        ));
    }

    if usuario.telefono.trim().is_empty() {
        return Err(UsuarioError::validation(
            "telefono",
            "El teléfono no puede estar vacío",
        ));
    }

    // Day granularity in the local system timezone
    if usuario.fecha_nacimiento > chrono::Local::now().date_naive() {
        return Err(UsuarioError::validation(
            "fecha_nacimiento",
            "La fecha de nacimiento no puede ser futura",
        ));
    }

    if !(0.0..=15_000_000.0).contains(&usuario.salario_base) {
        return Err(UsuarioError::validation(
            "salario_base",
            "El salario base debe estar entre 0 y 15,000,000",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUsuarioRepository;
    use chrono::{Duration, Local, NaiveDate, Utc};
    use domain_roles::Rol;

    fn rol_valido() -> Rol {
        Rol {
            id: Some(1),
            nombre: "CLIENTE".to_string(),
            descripcion: "Rol para clientes".to_string(),
            ..Default::default()
        }
    }

    fn usuario_valido() -> Usuario {
        Usuario {
            id: Some(1),
            nombres: "John".to_string(),
            apellidos: "Doe".to_string(),
            fecha_nacimiento: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: "john.doe@example.com".to_string(),
            documento_identidad: "123456789".to_string(),
            telefono: "3001234567".to_string(),
            direccion: "Calle Falsa 123".to_string(),
            salario_base: 2_500_000.0,
            rol: rol_valido(),
            created_by: None,
            modified_by: None,
            date_created: None,
            date_modified: None,
        }
    }

    fn usuario_nuevo() -> Usuario {
        Usuario {
            id: None,
            ..usuario_valido()
        }
    }

    #[tokio::test]
    async fn test_save_usuario_success_performs_exactly_one_write() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "john.doe@example.com")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_documento_identidad()
            .withf(|documento| documento == "123456789")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().times(1).returning(|usuario| {
            Ok(Usuario {
                id: Some(1),
                date_created: Some(Utc::now()),
                date_modified: Some(Utc::now()),
                ..usuario
            })
        });

        let service = UsuarioService::new(mock_repo);
        let saved = service.save_usuario(usuario_nuevo()).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.email, "john.doe@example.com");
        assert!(saved.date_created.is_some());
    }

    #[tokio::test]
    async fn test_save_usuario_email_exists_short_circuits() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(usuario_valido())));
        // The documento lookup and the save must never run
        mock_repo.expect_find_by_documento_identidad().times(0);
        mock_repo.expect_save().times(0);

        let service = UsuarioService::new(mock_repo);
        let result = service.save_usuario(usuario_nuevo()).await;

        match result {
            Err(UsuarioError::EmailAlreadyExists(msg)) => {
                assert_eq!(msg, "El correo electrónico ya está registrado");
            }
            other => panic!("expected EmailAlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_usuario_documento_exists_never_saves() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_documento_identidad()
            .times(1)
            .returning(|_| Ok(Some(usuario_valido())));
        mock_repo.expect_save().times(0);

        let service = UsuarioService::new(mock_repo);
        let result = service.save_usuario(usuario_nuevo()).await;

        match result {
            Err(UsuarioError::DocumentoAlreadyExists(msg)) => {
                assert_eq!(msg, "El documento de identidad ya está registrado");
            }
            other => panic!("expected DocumentoAlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_usuario_success() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_documento_identidad()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|usuario| Ok(usuario));

        let service = UsuarioService::new(mock_repo);
        let updated = service.update_usuario(usuario_valido()).await.unwrap();

        assert_eq!(updated.id, Some(1));
    }

    #[tokio::test]
    async fn test_update_usuario_self_match_is_allowed() {
        let mut mock_repo = MockUsuarioRepository::new();

        // Both lookups find the record being updated itself
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(usuario_valido())));
        mock_repo
            .expect_find_by_documento_identidad()
            .times(1)
            .returning(|_| Ok(Some(usuario_valido())));
        mock_repo
            .expect_save()
            .times(1)
            .returning(|usuario| Ok(usuario));

        let service = UsuarioService::new(mock_repo);
        let result = service.update_usuario(usuario_valido()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_update_usuario_email_taken_by_another_user() {
        let mut mock_repo = MockUsuarioRepository::new();

        let otro_usuario = Usuario {
            id: Some(2),
            documento_identidad: "987654321".to_string(),
            ..usuario_valido()
        };

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(otro_usuario.clone())));
        // Both checks are evaluated even though the email check fails
        mock_repo
            .expect_find_by_documento_identidad()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_save().times(0);

        let service = UsuarioService::new(mock_repo);
        let result = service.update_usuario(usuario_valido()).await;

        match result {
            Err(UsuarioError::EmailAlreadyExists(msg)) => {
                assert_eq!(msg, "El correo electrónico ya está registrado por otro usuario");
            }
            other => panic!("expected EmailAlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_usuario_documento_taken_by_another_user() {
        let mut mock_repo = MockUsuarioRepository::new();

        let otro_usuario = Usuario {
            id: Some(2),
            email: "other@example.com".to_string(),
            ..usuario_valido()
        };

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_find_by_documento_identidad()
            .times(1)
            .returning(move |_| Ok(Some(otro_usuario.clone())));
        mock_repo.expect_save().times(0);

        let service = UsuarioService::new(mock_repo);
        let result = service.update_usuario(usuario_valido()).await;

        match result {
            Err(UsuarioError::DocumentoAlreadyExists(msg)) => {
                assert_eq!(
                    msg,
                    "El documento de identidad ya está registrado por otro usuario"
                );
            }
            other => panic!("expected DocumentoAlreadyExists, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_usuario_without_id_is_rejected() {
        let mock_repo = MockUsuarioRepository::new();

        let service = UsuarioService::new(mock_repo);
        let result = service.update_usuario(usuario_nuevo()).await;

        match result {
            Err(UsuarioError::Validation { field, .. }) => assert_eq!(field, "id"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_usuario_by_id_absent_yields_none() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UsuarioService::new(mock_repo);
        let found = service.get_usuario_by_id(42).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_usuario_absent_id_completes() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Ok(()));

        let service = UsuarioService::new(mock_repo);
        assert!(service.delete_usuario(42).await.is_ok());
    }

    #[tokio::test]
    async fn test_get_all_usuarios_passes_through() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Ok(vec![usuario_valido()]));

        let service = UsuarioService::new(mock_repo);
        let all = service.get_all_usuarios().await.unwrap();

        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_validation_first_failure_wins() {
        // No expectations: the repository must never be touched
        let mock_repo = MockUsuarioRepository::new();
        let service = UsuarioService::new(mock_repo);

        let usuario = Usuario {
            nombres: "   ".to_string(),
            email: "not-an-email".to_string(),
            ..usuario_nuevo()
        };

        // nombres is checked before email, so its failure is the one reported
        match service.save_usuario(usuario).await {
            Err(UsuarioError::Validation { field, message }) => {
                assert_eq!(field, "nombres");
                assert_eq!(message, "El nombre no puede estar vacío");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_lookups() {
        let mock_repo = MockUsuarioRepository::new();
        let service = UsuarioService::new(mock_repo);

        let usuario = Usuario {
            email: "john.doe@example".to_string(),
            ..usuario_nuevo()
        };

        match service.save_usuario(usuario).await {
            Err(UsuarioError::Validation { field, .. }) => assert_eq!(field, "email"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_salario_boundaries() {
        for (salario, should_pass) in [
            (0.0, true),
            (15_000_000.0, true),
            (-0.01, false),
            (15_000_000.01, false),
        ] {
            let mut mock_repo = MockUsuarioRepository::new();

            if should_pass {
                mock_repo.expect_find_by_email().returning(|_| Ok(None));
                mock_repo
                    .expect_find_by_documento_identidad()
                    .returning(|_| Ok(None));
                mock_repo.expect_save().returning(|usuario| {
                    Ok(Usuario {
                        id: Some(1),
                        ..usuario
                    })
                });
            }

            let service = UsuarioService::new(mock_repo);
            let usuario = Usuario {
                salario_base: salario,
                ..usuario_nuevo()
            };

            let result = service.save_usuario(usuario).await;
            if should_pass {
                assert!(result.is_ok(), "salario {} should be accepted", salario);
            } else {
                assert!(
                    matches!(
                        result,
                        Err(UsuarioError::Validation {
                            field: "salario_base",
                            ..
                        })
                    ),
                    "salario {} should be rejected",
                    salario
                );
            }
        }
    }

    #[tokio::test]
    async fn test_fecha_nacimiento_today_accepted_tomorrow_rejected() {
        // Today passes validation and reaches the uniqueness checks
        let mut mock_repo = MockUsuarioRepository::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo
            .expect_find_by_documento_identidad()
            .returning(|_| Ok(None));
        mock_repo.expect_save().returning(|usuario| {
            Ok(Usuario {
                id: Some(1),
                ..usuario
            })
        });

        let service = UsuarioService::new(mock_repo);
        let hoy = Usuario {
            fecha_nacimiento: Local::now().date_naive(),
            ..usuario_nuevo()
        };
        assert!(service.save_usuario(hoy).await.is_ok());

        // Tomorrow fails before any repository access
        let service = UsuarioService::new(MockUsuarioRepository::new());
        let manana = Usuario {
            fecha_nacimiento: Local::now().date_naive() + Duration::days(1),
            ..usuario_nuevo()
        };
        assert!(matches!(
            service.save_usuario(manana).await,
            Err(UsuarioError::Validation {
                field: "fecha_nacimiento",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate_unchanged() {
        let mut mock_repo = MockUsuarioRepository::new();

        mock_repo.expect_find_by_email().times(1).returning(|_| {
            Err(UsuarioError::Repository(
                "Error buscando usuario por email en la base de datos".to_string(),
            ))
        });
        mock_repo.expect_save().times(0);

        let service = UsuarioService::new(mock_repo);
        let result = service.save_usuario(usuario_nuevo()).await;

        assert!(matches!(result, Err(UsuarioError::Repository(_))));
    }
}
