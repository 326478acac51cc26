use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    core::state::AppState,
    handlers::{
        companies::{get_company, list_companies},
        employees::list_employees,
    },
};

pub fn company_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_companies))
        .route("/:company_id", get(get_company))
        .route(
            "/:company_id/workspaces/:workspace_id/employees",
            get(list_employees),
        )
}
