use hired::config::catalog::RoleCatalog;
use hired::core::draft::{HireDraft, HireSubmission, WorkspaceInfo};
use hired::models::{
    company,
    employee::{self, EmployeeRole, TaskList},
    user, workspace,
};
use hired::services::hire::HireService;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn test_user() -> user::Model {
    user::Model {
        id: "user-1".to_string(),
        email: "tony@stark.example".to_string(),
        name: "Tony".to_string(),
        created_at: now(),
    }
}

fn company_row(id: &str, name: &str) -> company::Model {
    company::Model {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        company_name: name.to_string(),
        created_at: now(),
    }
}

fn workspace_row(id: &str, company_id: &str, name: &str) -> workspace::Model {
    workspace::Model {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        company_id: company_id.to_string(),
        workspace_name: name.to_string(),
        website_url: None,
        team_size: None,
        current_ai_employees: None,
        created_at: now(),
    }
}

fn employee_row(id: &str, workspace_id: &str, role: EmployeeRole, tasks: &[String]) -> employee::Model {
    employee::Model {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        workspace_id: workspace_id.to_string(),
        employee_type: role,
        name: role.display_name(),
        tasks: TaskList(tasks.to_vec()),
        created_at: now(),
    }
}

/// Drive the wizard the way the hire handler does and hand back the
/// submission it would persist.
fn submission(company_name: &str, workspace_name: &str, role: EmployeeRole) -> HireSubmission {
    let catalog = RoleCatalog::builtin().unwrap();

    let mut draft = HireDraft::new();
    draft
        .continue_to_role_selection(WorkspaceInfo {
            company_name: company_name.to_string(),
            workspace_name: workspace_name.to_string(),
            ..Default::default()
        })
        .unwrap();
    draft.select_role(role, &catalog).unwrap();
    draft.into_submission().unwrap()
}

#[tokio::test]
async fn reuses_existing_company_with_matching_name() {
    let catalog = RoleCatalog::builtin().unwrap();
    let defaults = catalog.default_tasks(EmployeeRole::HrManager).unwrap();

    let existing = company_row("acme-1", "Acme");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![existing]])
        .append_query_results([vec![workspace_row("ws-1", "acme-1", "HR Team")]])
        .append_query_results([vec![employee_row(
            "emp-1",
            "ws-1",
            EmployeeRole::HrManager,
            defaults,
        )]])
        .into_connection();

    let service = HireService::new(db.clone());
    let outcome = service
        .submit(&test_user(), submission("Acme", "HR Team", EmployeeRole::HrManager))
        .await
        .unwrap();

    assert_eq!(outcome.company_id, "acme-1");
    assert_eq!(outcome.workspace_id, "ws-1");
    assert_eq!(outcome.redirect_to, "/dashboard/acme-1/ws-1");

    // Three statements only: the lookup and the two dependent creates.
    // No second company row is written for an already-known name.
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 3);
    // The Debug dump escapes the quoted identifiers, so match \"table\".
    let log_str = format!("{:?}", log);
    assert!(!log_str.contains(r#"INSERT INTO \"companies\""#));
    assert!(log_str.contains(r#"INSERT INTO \"workspaces\""#));
    assert!(log_str.contains(r#"INSERT INTO \"employees\""#));
}

#[tokio::test]
async fn creates_company_workspace_and_employee_for_new_name() {
    let catalog = RoleCatalog::builtin().unwrap();
    let defaults = catalog.default_tasks(EmployeeRole::SalesAssistant).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<company::Model>::new()])
        .append_query_results([vec![company_row("newco-1", "NewCo")]])
        .append_query_results([vec![workspace_row("ws-1", "newco-1", "Sales")]])
        .append_query_results([vec![employee_row(
            "emp-1",
            "ws-1",
            EmployeeRole::SalesAssistant,
            defaults,
        )]])
        .into_connection();

    let service = HireService::new(db.clone());
    let outcome = service
        .submit(
            &test_user(),
            submission("NewCo", "Sales", EmployeeRole::SalesAssistant),
        )
        .await
        .unwrap();

    assert_eq!(outcome.company_id, "newco-1");
    assert_eq!(outcome.redirect_to, "/dashboard/newco-1/ws-1");

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 4);
    let log_str = format!("{:?}", log);
    assert!(log_str.contains(r#"INSERT INTO \"companies\""#));
    assert!(log_str.contains(r#"INSERT INTO \"workspaces\""#));
    assert!(log_str.contains(r#"INSERT INTO \"employees\""#));
}

#[tokio::test]
async fn submitted_employee_carries_role_name_and_default_tasks() {
    let catalog = RoleCatalog::builtin().unwrap();
    let defaults = catalog.default_tasks(EmployeeRole::HrManager).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<company::Model>::new()])
        .append_query_results([vec![company_row("stark-1", "Stark Industries")]])
        .append_query_results([vec![workspace_row("ws-1", "stark-1", "HR Team")]])
        .append_query_results([vec![employee_row(
            "emp-1",
            "ws-1",
            EmployeeRole::HrManager,
            defaults,
        )]])
        .into_connection();

    let service = HireService::new(db.clone());
    let outcome = service
        .submit(
            &test_user(),
            submission("Stark Industries", "HR Team", EmployeeRole::HrManager),
        )
        .await
        .unwrap();

    assert_eq!(outcome.employee.employee_type, EmployeeRole::HrManager);
    assert_eq!(outcome.employee.name, "HR Manager");
    assert_eq!(
        outcome.employee.tasks.0,
        [
            "Onboarding new employees",
            "Managing payroll",
            "Handling employee benefits",
        ]
    );

    // The persisted employee row is the wizard's selection verbatim.
    let log_str = format!("{:?}", db.into_transaction_log());
    assert!(log_str.contains("HR Manager"));
    assert!(log_str.contains("Onboarding new employees"));
}

#[tokio::test]
async fn workspace_failure_stops_the_sequence_and_rolls_back_the_new_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<company::Model>::new()])
        .append_query_results([vec![company_row("newco-1", "NewCo")]])
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let service = HireService::new(db.clone());
    let err = service
        .submit(
            &test_user(),
            submission("NewCo", "Sales", EmployeeRole::SalesAssistant),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("connection reset"));

    let log_str = format!("{:?}", db.into_transaction_log());
    assert!(!log_str.contains(r#"INSERT INTO \"employees\""#));
    assert!(log_str.contains(r#"DELETE FROM \"companies\""#));
}

#[tokio::test]
async fn workspace_failure_leaves_a_preexisting_company_alone() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![company_row("acme-1", "Acme")]])
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();

    let service = HireService::new(db.clone());
    let err = service
        .submit(&test_user(), submission("Acme", "Ops", EmployeeRole::ScrumMaster))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("connection reset"));

    let log_str = format!("{:?}", db.into_transaction_log());
    assert!(!log_str.contains("DELETE"));
    assert!(!log_str.contains(r#"INSERT INTO \"employees\""#));
}

#[tokio::test]
async fn employee_failure_rolls_back_workspace_and_new_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<company::Model>::new()])
        .append_query_results([vec![company_row("newco-1", "NewCo")]])
        .append_query_results([vec![workspace_row("ws-1", "newco-1", "Sales")]])
        .append_query_errors([DbErr::Custom("permission denied".to_string())])
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let service = HireService::new(db.clone());
    let err = service
        .submit(
            &test_user(),
            submission("NewCo", "Sales", EmployeeRole::SalesAssistant),
        )
        .await
        .unwrap_err();

    assert!(err.to_string().contains("permission denied"));

    let log_str = format!("{:?}", db.into_transaction_log());
    assert!(log_str.contains(r#"DELETE FROM \"workspaces\""#));
    assert!(log_str.contains(r#"DELETE FROM \"companies\""#));
}
