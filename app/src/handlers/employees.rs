use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use tracing::error;

use crate::{
    core::state::AppState,
    models::{employee::Model as Employee, user::Model as User},
    repos::{companies::CompaniesRepo, employees::EmployeesRepo, workspaces::WorkspacesRepo},
    utils::response::APIError,
};

#[derive(Debug, Serialize)]
pub struct EmployeeListResponse {
    employees: Vec<Employee>,
}

pub async fn list_employees(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path((company_id, workspace_id)): Path<(String, String)>,
) -> Result<Json<EmployeeListResponse>, APIError> {
    let companies_repo = CompaniesRepo::new(state.database.clone());
    let company = companies_repo
        .get_owned(&company_id, &user.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch company {}: {}", company_id, e);
            APIError::InternalServerError("Could not fetch company".to_string())
        })?
        .ok_or_else(|| APIError::NotFound("Company not found".to_string()))?;

    let workspaces_repo = WorkspacesRepo::new(state.database.clone());
    let workspace = workspaces_repo
        .get(&workspace_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch workspace {}: {}", workspace_id, e);
            APIError::InternalServerError("Could not fetch workspace".to_string())
        })?
        .filter(|w| w.company_id == company.id)
        .ok_or_else(|| APIError::NotFound("Workspace not found".to_string()))?;

    let employees_repo = EmployeesRepo::new(state.database.clone());
    let employees = employees_repo
        .list_by_workspace(&workspace.id, &user.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch employees: {}", e);
            APIError::InternalServerError("Could not fetch AI employees".to_string())
        })?;

    Ok(Json(EmployeeListResponse { employees }))
}
