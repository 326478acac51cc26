use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    models::employee::{
        self, ActiveModel, EmployeeRole, Entity as EmployeeEntity, Model as Employee, TaskList,
    },
    utils::id::generate_id,
};

pub struct EmployeesRepo {
    db: DatabaseConnection,
}

impl EmployeesRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: String,
        workspace_id: String,
        role: EmployeeRole,
        tasks: Vec<String>,
    ) -> Result<Employee, DbErr> {
        let employee_model = ActiveModel {
            id: Set(generate_id()),
            user_id: Set(user_id),
            workspace_id: Set(workspace_id),
            employee_type: Set(role),
            // Display name defaults to the role name.
            name: Set(role.display_name()),
            tasks: Set(TaskList(tasks)),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let employee = employee_model.insert(&self.db).await?;

        Ok(employee)
    }

    pub async fn list_by_workspace(
        &self,
        workspace_id: &str,
        user_id: &str,
    ) -> Result<Vec<Employee>, DbErr> {
        EmployeeEntity::find()
            .filter(employee::Column::WorkspaceId.eq(workspace_id))
            .filter(employee::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
    }

    pub async fn delete(&self, employee_id: String) -> Result<(), DbErr> {
        EmployeeEntity::delete_by_id(employee_id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
