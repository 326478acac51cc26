use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    core::draft::WorkspaceInfo,
    models::workspace::{self, ActiveModel, Entity as WorkspaceEntity, Model as Workspace},
    utils::id::generate_id,
};

pub struct WorkspacesRepo {
    db: DatabaseConnection,
}

impl WorkspacesRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: String,
        company_id: String,
        info: &WorkspaceInfo,
    ) -> Result<Workspace, DbErr> {
        let workspace_model = ActiveModel {
            id: Set(generate_id()),
            user_id: Set(user_id),
            company_id: Set(company_id),
            workspace_name: Set(info.workspace_name.clone()),
            website_url: Set(info.website_url.clone()),
            team_size: Set(info.team_size.clone()),
            current_ai_employees: Set(info.current_ai_employees),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let workspace = workspace_model.insert(&self.db).await?;

        Ok(workspace)
    }

    pub async fn get(&self, workspace_id: &str) -> Result<Option<Workspace>, DbErr> {
        WorkspaceEntity::find_by_id(workspace_id).one(&self.db).await
    }

    pub async fn list_by_company(&self, company_id: &str) -> Result<Vec<Workspace>, DbErr> {
        WorkspaceEntity::find()
            .filter(workspace::Column::CompanyId.eq(company_id))
            .all(&self.db)
            .await
    }

    pub async fn delete(&self, workspace_id: String) -> Result<(), DbErr> {
        WorkspaceEntity::delete_by_id(workspace_id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
