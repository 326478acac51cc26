use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};
use tracing::info;

use crate::{
    models::company::{self, ActiveModel, Entity as CompanyEntity, Model as Company},
    utils::id::generate_id,
};

pub struct CompaniesRepo {
    db: DatabaseConnection,
}

impl CompaniesRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: String, company_name: String) -> Result<Company, DbErr> {
        let company_model = ActiveModel {
            id: Set(generate_id()),
            user_id: Set(user_id),
            company_name: Set(company_name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let company = company_model.insert(&self.db).await?;

        Ok(company)
    }

    pub async fn find_by_user_and_name(
        &self,
        user_id: &str,
        company_name: &str,
    ) -> Result<Option<Company>, DbErr> {
        CompanyEntity::find()
            .filter(company::Column::UserId.eq(user_id))
            .filter(company::Column::CompanyName.eq(company_name))
            .one(&self.db)
            .await
    }

    /// Resolve a company by (owner, name), creating it when absent. The
    /// unique index on (user_id, company_name) closes the read-then-write
    /// race: a concurrent twin's insert shows up here as a unique violation,
    /// which is resolved by re-reading the row the twin created.
    ///
    /// Returns the company and whether this call created it.
    pub async fn find_or_create(
        &self,
        user_id: &str,
        company_name: &str,
    ) -> Result<(Company, bool), DbErr> {
        if let Some(company) = self.find_by_user_and_name(user_id, company_name).await? {
            return Ok((company, false));
        }

        match self
            .create(user_id.to_string(), company_name.to_string())
            .await
        {
            Ok(company) => Ok((company, true)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                info!(
                    "Company '{}' was created concurrently, reusing it",
                    company_name
                );
                match self.find_by_user_and_name(user_id, company_name).await? {
                    Some(company) => Ok((company, false)),
                    None => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_owned(&self, company_id: &str, user_id: &str) -> Result<Option<Company>, DbErr> {
        CompanyEntity::find_by_id(company_id)
            .filter(company::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Company>, DbErr> {
        CompanyEntity::find()
            .filter(company::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
    }

    pub async fn delete(&self, company_id: String) -> Result<(), DbErr> {
        CompanyEntity::delete_by_id(company_id)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
