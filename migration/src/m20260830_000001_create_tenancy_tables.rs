use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users
        manager
            .create_table(
                Table::create()
                    .table("users")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("email").not_null())
                    .col(string("name").not_null())
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table("users")
                    .col(Alias::new("email"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // companies
        manager
            .create_table(
                Table::create()
                    .table("companies")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("user_id").not_null())
                    .col(string("company_name").not_null())
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_users")
                            .from("companies", "user_id")
                            .to("users", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One company row per (owner, name). The hire flow's find-or-create
        // relies on this to turn a concurrent duplicate create into a
        // unique-violation it can recover from.
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_user_id_company_name")
                    .table("companies")
                    .col(Alias::new("user_id"))
                    .col(Alias::new("company_name"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // workspaces
        manager
            .create_table(
                Table::create()
                    .table("workspaces")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("user_id").not_null())
                    .col(string("company_id").not_null())
                    .col(string("workspace_name").not_null())
                    .col(string_null("website_url"))
                    .col(string_null("team_size"))
                    .col(integer_null("current_ai_employees"))
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspaces_companies")
                            .from("workspaces", "company_id")
                            .to("companies", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // employees
        manager
            .create_table(
                Table::create()
                    .table("employees")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("user_id").not_null())
                    .col(string("workspace_id").not_null())
                    .col(string("employee_type").not_null())
                    .col(string("name").not_null())
                    .col(json_binary("tasks").not_null())
                    .col(
                        timestamp("created_at")
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_workspaces")
                            .from("employees", "workspace_id")
                            .to("workspaces", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("employees").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("workspaces").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("companies").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("users").to_owned())
            .await?;

        Ok(())
    }
}
