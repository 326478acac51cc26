use sea_orm::{entity::prelude::*, ActiveEnum};
use serde::{Deserialize, Serialize};

/// The closed set of hireable roles. Stored in the database and serialized
/// over the API as the human-readable role name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EmployeeRole {
    #[sea_orm(string_value = "HR Manager")]
    #[serde(rename = "HR Manager")]
    HrManager,
    #[sea_orm(string_value = "Social Media Marketer")]
    #[serde(rename = "Social Media Marketer")]
    SocialMediaMarketer,
    #[sea_orm(string_value = "Sales Assistant")]
    #[serde(rename = "Sales Assistant")]
    SalesAssistant,
    #[sea_orm(string_value = "Scrum Master")]
    #[serde(rename = "Scrum Master")]
    ScrumMaster,
    #[sea_orm(string_value = "Customer Support Agent")]
    #[serde(rename = "Customer Support Agent")]
    CustomerSupportAgent,
    #[sea_orm(string_value = "Data Analyst")]
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
}

impl EmployeeRole {
    /// The role name as shown to users and stored in `employees.employee_type`.
    pub fn display_name(&self) -> String {
        self.to_value()
    }
}

/// Ordered, duplicate-free list of task descriptions, stored as JSONB.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TaskList(pub Vec<String>);

#[derive(Debug, Clone, DeriveEntityModel, PartialEq, Serialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: String,
    pub user_id: String,
    pub workspace_id: String,
    pub employee_type: EmployeeRole,
    pub name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tasks: TaskList,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workspace::Entity",
        from = "Column::WorkspaceId",
        to = "super::workspace::Column::Id",
        on_delete = "Cascade"
    )]
    Workspace,
}

impl Related<super::workspace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workspace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
