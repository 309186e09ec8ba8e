//! Migration: Add the unified-profile columns to users.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Each column guarded separately; partial application of the old
        // ad-hoc script left some databases with a subset of these.
        if !manager.has_column("users", "bio").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Bio).text())
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("users", "location").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Location).string_len(255))
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("users", "github").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Github).string_len(255))
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("users", "linkedin").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Users::Table)
                        .add_column(ColumnDef::new(Users::Linkedin).string_len(255))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .drop_column(Users::Bio)
                    .drop_column(Users::Location)
                    .drop_column(Users::Github)
                    .drop_column(Users::Linkedin)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Bio,
    Location,
    Github,
    Linkedin,
}
