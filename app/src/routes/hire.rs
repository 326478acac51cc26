use std::sync::Arc;

use axum::{routing::post, Router};

use crate::{core::state::AppState, handlers::hire::submit_hire};

pub fn hire_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", post(submit_hire))
}
