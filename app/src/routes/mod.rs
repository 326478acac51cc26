pub mod auth;
pub mod companies;
pub mod hire;
pub mod roles;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;

use crate::{
    core::state::AppState,
    middlewares::auth::require_auth,
    routes::{
        auth::{auth_routes, protected_auth_routes},
        companies::company_routes,
        hire::hire_routes,
        roles::role_routes,
    },
    utils::global_error_handler::global_error_handler,
};

pub fn create_routers(state: Arc<AppState>) -> Router<()> {
    let public_routes = Router::new()
        .nest("/auth", auth_routes())
        .nest("/roles", role_routes());

    let protected_routes = Router::new()
        .nest("/auth", protected_auth_routes())
        .nest("/companies", company_routes())
        .nest("/hire", hire_routes())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .fallback(global_error_handler)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
