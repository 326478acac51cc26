use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use tracing::error;

use crate::{
    core::state::AppState,
    models::{company::Model as Company, user::Model as User, workspace::Model as Workspace},
    repos::{companies::CompaniesRepo, workspaces::WorkspacesRepo},
    utils::response::APIError,
};

#[derive(Debug, Serialize)]
pub struct CompanyListResponse {
    companies: Vec<Company>,
}

#[derive(Debug, Serialize)]
pub struct CompanyDetailResponse {
    company: Company,
    workspaces: Vec<Workspace>,
}

pub async fn list_companies(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
) -> Result<Json<CompanyListResponse>, APIError> {
    let companies_repo = CompaniesRepo::new(state.database.clone());

    let companies = companies_repo.list_by_user(&user.id).await.map_err(|e| {
        error!("Failed to fetch companies: {}", e);
        APIError::InternalServerError("Could not fetch companies".to_string())
    })?;

    Ok(Json(CompanyListResponse { companies }))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Path(company_id): Path<String>,
) -> Result<Json<CompanyDetailResponse>, APIError> {
    let companies_repo = CompaniesRepo::new(state.database.clone());

    // Ownership check doubles as existence check: someone else's company
    // looks exactly like a missing one.
    let company = companies_repo
        .get_owned(&company_id, &user.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch company {}: {}", company_id, e);
            APIError::InternalServerError("Could not fetch company".to_string())
        })?
        .ok_or_else(|| {
            APIError::NotFound(
                "The organization you're looking for doesn't exist or you don't have permission to view it".to_string(),
            )
        })?;

    let workspaces_repo = WorkspacesRepo::new(state.database.clone());
    let workspaces = workspaces_repo
        .list_by_company(&company.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch workspaces: {}", e);
            APIError::InternalServerError("Could not fetch workspaces".to_string())
        })?;

    Ok(Json(CompanyDetailResponse { company, workspaces }))
}
