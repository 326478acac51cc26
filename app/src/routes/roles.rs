use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{core::state::AppState, handlers::roles::list_roles};

pub fn role_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_roles))
}
