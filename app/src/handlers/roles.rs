use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    config::catalog::{RoleEntry, DEFAULT_TASK_COUNT},
    core::state::AppState,
};

#[derive(Debug, Serialize)]
pub struct RoleInfo {
    role: String,
    description: String,
    tasks: Vec<String>,
    default_tasks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    roles: Vec<RoleInfo>,
}

/// The wizard's role-selection step reads the catalog from here.
pub async fn list_roles(State(state): State<Arc<AppState>>) -> Json<RoleListResponse> {
    let roles = state
        .catalog
        .roles
        .iter()
        .map(|entry: &RoleEntry| RoleInfo {
            role: entry.role.display_name(),
            description: entry.description.clone(),
            tasks: entry.tasks.clone(),
            default_tasks: entry.tasks[..DEFAULT_TASK_COUNT].to_vec(),
        })
        .collect();

    Json(RoleListResponse { roles })
}
