use axum::Router;
use domain_usuarios::{PgUsuarioRepository, UsuarioService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgUsuarioRepository::new(state.db.clone());
    let service = UsuarioService::new(repository);
    handlers::router(service)
}
