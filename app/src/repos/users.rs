use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    models::user::{self, ActiveModel, Entity as UserEntity, Model as User},
    utils::id::generate_id,
};

pub struct UsersRepo {
    db: DatabaseConnection,
}

impl UsersRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, email: String, name: String) -> Result<User, DbErr> {
        let user_model = ActiveModel {
            id: Set(generate_id()),
            email: Set(email),
            name: Set(name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let user = user_model.insert(&self.db).await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<User, DbErr> {
        match self.find_by_email(email).await? {
            Some(u) => Ok(u),
            None => Err(DbErr::RecordNotFound(format!(
                "User with the email {} not found",
                email
            ))),
        }
    }
}
