use serde::Deserialize;
use thiserror::Error;

use crate::config::catalog::RoleCatalog;
use crate::models::employee::EmployeeRole;

#[derive(Debug, Error, PartialEq)]
pub enum DraftError {
    #[error("Action '{action}' is not available at the {step:?} step")]
    WrongStep { action: &'static str, step: DraftStep },

    #[error("Role '{0}' is not in the catalog")]
    UnknownRole(String),

    #[error("No role has been selected yet")]
    NoRoleSelected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStep {
    CollectingWorkspaceInfo,
    SelectingRole,
    SelectingTasks,
}

/// Company and workspace metadata collected in the first wizard step.
/// No field validation happens here; empty strings are accepted as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceInfo {
    pub company_name: String,
    pub workspace_name: String,
    pub website_url: Option<String>,
    pub team_size: Option<String>,
    pub current_ai_employees: Option<i32>,
}

/// Everything the wizard collected, ready to be persisted.
#[derive(Debug, Clone)]
pub struct HireSubmission {
    pub info: WorkspaceInfo,
    pub role: EmployeeRole,
    pub tasks: Vec<String>,
}

/// The in-progress hire wizard. Holds the uncommitted draft of company,
/// workspace and employee until submission; dropped drafts leave no trace.
#[derive(Debug, Clone)]
pub struct HireDraft {
    step: DraftStep,
    info: WorkspaceInfo,
    role: Option<EmployeeRole>,
    tasks: Vec<String>,
}

impl Default for HireDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl HireDraft {
    pub fn new() -> Self {
        Self {
            step: DraftStep::CollectingWorkspaceInfo,
            info: WorkspaceInfo::default(),
            role: None,
            tasks: Vec::new(),
        }
    }

    pub fn step(&self) -> DraftStep {
        self.step
    }

    pub fn selected_role(&self) -> Option<EmployeeRole> {
        self.role
    }

    pub fn selected_tasks(&self) -> &[String] {
        &self.tasks
    }

    /// First step: record the company/workspace metadata and move on.
    /// Unconditional; empty names are permitted.
    pub fn continue_to_role_selection(&mut self, info: WorkspaceInfo) -> Result<(), DraftError> {
        if self.step != DraftStep::CollectingWorkspaceInfo {
            return Err(DraftError::WrongStep {
                action: "continue",
                step: self.step,
            });
        }

        self.info = info;
        self.step = DraftStep::SelectingRole;
        Ok(())
    }

    /// Second step: pick a role. Seeds the task selection with the role's
    /// default tasks. Re-selecting the same role after navigating back keeps
    /// whatever the user already chose.
    pub fn select_role(
        &mut self,
        role: EmployeeRole,
        catalog: &RoleCatalog,
    ) -> Result<(), DraftError> {
        if self.step != DraftStep::SelectingRole {
            return Err(DraftError::WrongStep {
                action: "select role",
                step: self.step,
            });
        }

        let defaults = catalog
            .default_tasks(role)
            .ok_or_else(|| DraftError::UnknownRole(role.display_name()))?;

        if self.role != Some(role) || self.tasks.is_empty() {
            self.tasks = defaults.to_vec();
        }

        self.role = Some(role);
        self.step = DraftStep::SelectingTasks;
        Ok(())
    }

    /// Toggle a catalog task in or out of the selection. Insertion order is
    /// preserved; toggling twice restores the previous selection.
    pub fn toggle_task(&mut self, task: &str) -> Result<(), DraftError> {
        self.require_task_step("toggle task")?;

        if let Some(pos) = self.tasks.iter().position(|t| t == task) {
            self.tasks.remove(pos);
        } else {
            self.tasks.push(task.to_string());
        }
        Ok(())
    }

    /// Append a free-text task if non-empty after trimming and not already
    /// selected (exact string match).
    pub fn add_custom_task(&mut self, task: &str) -> Result<(), DraftError> {
        self.require_task_step("add custom task")?;

        let task = task.trim();
        if !task.is_empty() && !self.tasks.iter().any(|t| t == task) {
            self.tasks.push(task.to_string());
        }
        Ok(())
    }

    pub fn remove_task(&mut self, task: &str) -> Result<(), DraftError> {
        self.require_task_step("remove task")?;

        self.tasks.retain(|t| t != task);
        Ok(())
    }

    /// Replace the whole selection, deduplicating by exact match while
    /// preserving first-occurrence order. Used when the client submits its
    /// final task list in one request.
    pub fn set_tasks(&mut self, tasks: Vec<String>) -> Result<(), DraftError> {
        self.require_task_step("set tasks")?;

        let mut deduped: Vec<String> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if !deduped.contains(&task) {
                deduped.push(task);
            }
        }
        self.tasks = deduped;
        Ok(())
    }

    /// Walk one step backward. Nothing collected so far is discarded.
    pub fn back(&mut self) {
        self.step = match self.step {
            DraftStep::CollectingWorkspaceInfo => DraftStep::CollectingWorkspaceInfo,
            DraftStep::SelectingRole => DraftStep::CollectingWorkspaceInfo,
            DraftStep::SelectingTasks => DraftStep::SelectingRole,
        };
    }

    /// Finish the wizard, yielding the data to persist.
    pub fn into_submission(self) -> Result<HireSubmission, DraftError> {
        if self.step != DraftStep::SelectingTasks {
            return Err(DraftError::WrongStep {
                action: "complete setup",
                step: self.step,
            });
        }
        let role = self.role.ok_or(DraftError::NoRoleSelected)?;

        Ok(HireSubmission {
            info: self.info,
            role,
            tasks: self.tasks,
        })
    }

    fn require_task_step(&self, action: &'static str) -> Result<(), DraftError> {
        if self.step != DraftStep::SelectingTasks {
            return Err(DraftError::WrongStep {
                action,
                step: self.step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin().unwrap()
    }

    fn draft_at_tasks(role: EmployeeRole) -> HireDraft {
        let mut draft = HireDraft::new();
        draft
            .continue_to_role_selection(WorkspaceInfo {
                company_name: "Stark Industries".to_string(),
                workspace_name: "HR Team".to_string(),
                ..Default::default()
            })
            .unwrap();
        draft.select_role(role, &catalog()).unwrap();
        draft
    }

    #[test]
    fn selecting_a_role_seeds_its_three_default_tasks() {
        let catalog = catalog();

        for entry in &catalog.roles {
            let draft = draft_at_tasks(entry.role);
            assert_eq!(draft.selected_tasks(), &entry.tasks[..3]);
        }
    }

    #[test]
    fn toggling_a_task_twice_restores_the_selection() {
        let mut draft = draft_at_tasks(EmployeeRole::ScrumMaster);
        let before = draft.selected_tasks().to_vec();

        draft.toggle_task("Coaching the team on Agile practices").unwrap();
        draft.toggle_task("Coaching the team on Agile practices").unwrap();

        assert_eq!(draft.selected_tasks(), &before[..]);
    }

    #[test]
    fn toggling_a_selected_task_removes_it() {
        let mut draft = draft_at_tasks(EmployeeRole::SalesAssistant);

        draft.toggle_task("Following up on leads").unwrap();

        assert_eq!(
            draft.selected_tasks(),
            ["Scheduling meetings", "Preparing sales reports"]
        );
    }

    #[test]
    fn duplicate_custom_task_is_a_noop() {
        let mut draft = draft_at_tasks(EmployeeRole::HrManager);

        draft.add_custom_task("Managing payroll").unwrap();
        assert_eq!(draft.selected_tasks().len(), 3);

        draft.add_custom_task("Writing job ads").unwrap();
        assert_eq!(draft.selected_tasks().len(), 4);

        draft.add_custom_task("Writing job ads").unwrap();
        assert_eq!(draft.selected_tasks().len(), 4);
    }

    #[test]
    fn blank_custom_task_is_ignored() {
        let mut draft = draft_at_tasks(EmployeeRole::DataAnalyst);

        draft.add_custom_task("   ").unwrap();

        assert_eq!(draft.selected_tasks().len(), 3);
    }

    #[test]
    fn custom_task_is_trimmed_before_dedupe() {
        let mut draft = draft_at_tasks(EmployeeRole::DataAnalyst);

        draft.add_custom_task("  Building weekly reports  ").unwrap();

        assert_eq!(draft.selected_tasks().len(), 3);
    }

    #[test]
    fn back_navigation_keeps_collected_state() {
        let mut draft = draft_at_tasks(EmployeeRole::ScrumMaster);
        draft.add_custom_task("Ordering pizza for retro").unwrap();
        let tasks = draft.selected_tasks().to_vec();

        draft.back();
        assert_eq!(draft.step(), DraftStep::SelectingRole);
        draft.back();
        assert_eq!(draft.step(), DraftStep::CollectingWorkspaceInfo);

        assert_eq!(draft.selected_role(), Some(EmployeeRole::ScrumMaster));
        assert_eq!(draft.selected_tasks(), &tasks[..]);
    }

    #[test]
    fn reselecting_the_same_role_keeps_the_selection() {
        let mut draft = draft_at_tasks(EmployeeRole::ScrumMaster);
        draft.add_custom_task("Ordering pizza for retro").unwrap();

        draft.back();
        draft.select_role(EmployeeRole::ScrumMaster, &catalog()).unwrap();

        assert_eq!(draft.selected_tasks().len(), 4);
    }

    #[test]
    fn selecting_a_different_role_reseeds_defaults() {
        let mut draft = draft_at_tasks(EmployeeRole::ScrumMaster);
        draft.add_custom_task("Ordering pizza for retro").unwrap();

        draft.back();
        draft.select_role(EmployeeRole::HrManager, &catalog()).unwrap();

        assert_eq!(
            draft.selected_tasks(),
            ["Onboarding new employees", "Managing payroll", "Handling employee benefits"]
        );
    }

    #[test]
    fn set_tasks_dedupes_preserving_order() {
        let mut draft = draft_at_tasks(EmployeeRole::HrManager);

        draft
            .set_tasks(vec![
                "b".to_string(),
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "a".to_string(),
            ])
            .unwrap();

        assert_eq!(draft.selected_tasks(), ["b", "a", "c"]);
    }

    #[test]
    fn submission_requires_the_task_step() {
        let draft = HireDraft::new();
        assert!(matches!(
            draft.into_submission(),
            Err(DraftError::WrongStep { .. })
        ));
    }

    #[test]
    fn completed_draft_yields_submission() {
        let draft = draft_at_tasks(EmployeeRole::HrManager);
        let submission = draft.into_submission().unwrap();

        assert_eq!(submission.role, EmployeeRole::HrManager);
        assert_eq!(submission.info.company_name, "Stark Industries");
        assert_eq!(submission.tasks.len(), 3);
    }

    #[test]
    fn empty_workspace_info_is_accepted() {
        let mut draft = HireDraft::new();
        draft
            .continue_to_role_selection(WorkspaceInfo::default())
            .unwrap();
        assert_eq!(draft.step(), DraftStep::SelectingRole);
    }
}
