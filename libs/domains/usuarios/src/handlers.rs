use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UsuarioError, UsuarioResult};
use crate::models::{CreateUsuario, RolRef, UpdateUsuario, Usuario};
use crate::repository::UsuarioRepository;
use crate::service::UsuarioService;

/// OpenAPI documentation for the Usuarios API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_usuarios,
        save_usuario,
        update_usuario,
        get_usuario,
        delete_usuario,
    ),
    components(
        schemas(Usuario, CreateUsuario, UpdateUsuario, RolRef),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "usuarios", description = "Operaciones relacionadas con la gestión de usuarios")
    )
)]
pub struct ApiDoc;

/// Create the usuarios router with all HTTP endpoints
pub fn router<R: UsuarioRepository + 'static>(service: UsuarioService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_usuarios).post(save_usuario).put(update_usuario),
        )
        .route("/{id}", get(get_usuario).delete(delete_usuario))
        .with_state(shared_service)
}

/// Get all registered usuarios
#[utoipa::path(
    get,
    path = "",
    tag = "usuarios",
    responses(
        (status = 200, description = "Lista de usuarios obtenida exitosamente", body = Vec<Usuario>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_usuarios<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
) -> UsuarioResult<Json<Vec<Usuario>>> {
    let usuarios = service.get_all_usuarios().await?;
    Ok(Json(usuarios))
}

/// Register a new usuario
#[utoipa::path(
    post,
    path = "",
    tag = "usuarios",
    request_body = CreateUsuario,
    responses(
        (status = 200, description = "Usuario guardado exitosamente", body = Usuario),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn save_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUsuario>,
) -> UsuarioResult<Json<Usuario>> {
    let usuario = service.save_usuario(input.into()).await?;
    Ok(Json(usuario))
}

/// Update an existing usuario (full replacement, the body carries its id)
#[utoipa::path(
    put,
    path = "",
    tag = "usuarios",
    request_body = UpdateUsuario,
    responses(
        (status = 200, description = "Usuario actualizado exitosamente", body = Usuario),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateUsuario>,
) -> UsuarioResult<Json<Usuario>> {
    let usuario = service.update_usuario(input.into()).await?;
    Ok(Json(usuario))
}

/// Get a usuario by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "ID del usuario a obtener")
    ),
    responses(
        (status = 200, description = "Usuario obtenido exitosamente", body = Usuario),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Path(id): Path<i32>,
) -> UsuarioResult<Json<Usuario>> {
    // Absence is a valid use-case outcome, translated to 404 only here
    let usuario = service
        .get_usuario_by_id(id)
        .await?
        .ok_or(UsuarioError::NotFound(id))?;

    Ok(Json(usuario))
}

/// Delete a usuario by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "ID del usuario a eliminar")
    ),
    responses(
        (status = 204, description = "Usuario eliminado exitosamente"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_usuario<R: UsuarioRepository>(
    State(service): State<Arc<UsuarioService<R>>>,
    Path(id): Path<i32>,
) -> UsuarioResult<impl IntoResponse> {
    service.delete_usuario(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
