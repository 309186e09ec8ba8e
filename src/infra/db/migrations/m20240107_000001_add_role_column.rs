//! Migration: Add the role column to users.
//!
//! Guarded by a column-existence check so re-running against a database
//! that already has the column is a no-op rather than a duplicate-column
//! error.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column("users", "role").await? {
            return Ok(());
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .add_column(
                        ColumnDef::new(Users::Role)
                            .enumeration(
                                Alias::new("role"),
                                [
                                    Alias::new("Student"),
                                    Alias::new("Mentor"),
                                    Alias::new("Admin"),
                                ],
                            )
                            .not_null()
                            .default("Student"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .drop_column(Users::Role)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Role,
}
