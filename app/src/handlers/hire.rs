use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use tracing::error;

use crate::{
    core::{
        draft::{DraftError, HireDraft, WorkspaceInfo},
        state::AppState,
    },
    models::{employee::EmployeeRole, user::Model as User},
    services::hire::{HireError, HireOutcome, HireService},
    utils::response::APIError,
};

/// The completed wizard in one request. Omitting `tasks` keeps the role's
/// default selection.
#[derive(Debug, Deserialize)]
pub struct HireRequest {
    #[serde(flatten)]
    pub info: WorkspaceInfo,
    pub employee_type: EmployeeRole,
    #[serde(default)]
    pub tasks: Option<Vec<String>>,
}

pub async fn submit_hire(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<User>,
    Json(payload): Json<HireRequest>,
) -> Result<Json<HireOutcome>, APIError> {
    // Replay the wizard steps so the draft rules (default seeding, exact
    // match dedupe, insertion order) apply to whatever the client sent.
    let submission = (|| -> Result<_, DraftError> {
        let mut draft = HireDraft::new();
        draft.continue_to_role_selection(payload.info)?;
        draft.select_role(payload.employee_type, &state.catalog)?;
        if let Some(tasks) = payload.tasks {
            draft.set_tasks(tasks)?;
        }
        draft.into_submission()
    })()
    .map_err(|e| APIError::BadRequest(e.to_string()))?;

    let hire_service = HireService::new(state.database.clone());

    let outcome = hire_service.submit(&user, submission).await.map_err(|e| {
        error!("Hire submission failed for {}: {}", user.email, e);
        let HireError::Store(db_err) = e;
        // The raw store failure is what the wizard shows in its banner.
        APIError::InternalServerError(db_err.to_string())
    })?;

    Ok(Json(outcome))
}
