use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Usuarios API",
        version = "0.1.0",
        description = "API para el registro y la gestión de usuarios y sus roles"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/usuarios", api = domain_usuarios::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
