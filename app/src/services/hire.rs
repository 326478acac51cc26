use sea_orm::{DatabaseConnection, DbErr};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    core::draft::HireSubmission,
    models::{employee::Model as Employee, user::Model as User},
    repos::{companies::CompaniesRepo, employees::EmployeesRepo, workspaces::WorkspacesRepo},
};

#[derive(Debug, Error)]
pub enum HireError {
    #[error("Store Error: {0}")]
    Store(#[from] DbErr),
}

/// Result of a successful wizard submission.
#[derive(Debug, Serialize)]
pub struct HireOutcome {
    pub company_id: String,
    pub workspace_id: String,
    pub employee: Employee,
    /// Where the dashboard should take the user next.
    pub redirect_to: String,
}

/// Persists a completed hire wizard draft: find-or-create the company,
/// create the workspace, create the employee record. The writes are strictly
/// sequential; each later step depends on an identifier from the one before.
///
/// There is no store transaction spanning the sequence. Instead, a failure
/// at any step deletes whatever this submission already created before the
/// error is surfaced, so a retry starts from a clean slate.
pub struct HireService {
    companies: CompaniesRepo,
    workspaces: WorkspacesRepo,
    employees: EmployeesRepo,
}

impl HireService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            companies: CompaniesRepo::new(db.clone()),
            workspaces: WorkspacesRepo::new(db.clone()),
            employees: EmployeesRepo::new(db),
        }
    }

    pub async fn submit(
        &self,
        user: &User,
        submission: HireSubmission,
    ) -> Result<HireOutcome, HireError> {
        let HireSubmission { info, role, tasks } = submission;

        let (company, company_created) = self
            .companies
            .find_or_create(&user.id, &info.company_name)
            .await?;

        if company_created {
            info!(
                "Created company '{}' ({}) for {}",
                company.company_name, company.id, user.email
            );
        }

        let workspace = match self
            .workspaces
            .create(user.id.clone(), company.id.clone(), &info)
            .await
        {
            Ok(w) => w,
            Err(e) => {
                error!("Workspace create failed: {}", e);
                self.rollback_company(&company.id, company_created).await;
                return Err(e.into());
            }
        };

        let employee = match self
            .employees
            .create(user.id.clone(), workspace.id.clone(), role, tasks)
            .await
        {
            Ok(emp) => emp,
            Err(e) => {
                error!("Employee create failed: {}", e);
                self.rollback_workspace(&workspace.id).await;
                self.rollback_company(&company.id, company_created).await;
                return Err(e.into());
            }
        };

        info!(
            "Hired {} '{}' into workspace '{}' ({})",
            employee.employee_type.display_name(),
            employee.name,
            workspace.workspace_name,
            workspace.id
        );

        Ok(HireOutcome {
            redirect_to: format!("/dashboard/{}/{}", company.id, workspace.id),
            company_id: company.id,
            workspace_id: workspace.id,
            employee,
        })
    }

    /// Compensation is best-effort: a delete that fails leaves an orphaned
    /// row behind, which is logged and must not mask the original error.
    async fn rollback_workspace(&self, workspace_id: &str) {
        if let Err(e) = self.workspaces.delete(workspace_id.to_string()).await {
            warn!(
                "Rollback failed, orphaned workspace {} left behind: {}",
                workspace_id, e
            );
        }
    }

    async fn rollback_company(&self, company_id: &str, created_here: bool) {
        // A pre-existing company was not written by this submission and
        // stays untouched.
        if !created_here {
            return;
        }

        if let Err(e) = self.companies.delete(company_id.to_string()).await {
            warn!(
                "Rollback failed, orphaned company {} left behind: {}",
                company_id, e
            );
        }
    }
}
