//! Migration: Create the courses and enrollments tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("courses").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Courses::Table)
                        .col(
                            ColumnDef::new(Courses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Courses::Title).string_len(255).not_null())
                        .col(ColumnDef::new(Courses::Description).text())
                        .col(ColumnDef::new(Courses::Category).string_len(100))
                        .col(
                            ColumnDef::new(Courses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("enrollments").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Enrollments::Table)
                        .col(
                            ColumnDef::new(Enrollments::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Enrollments::UserId).integer().not_null())
                        .col(ColumnDef::new(Enrollments::CourseId).integer().not_null())
                        .col(
                            ColumnDef::new(Enrollments::Progress)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Enrollments::Completed)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Enrollments::EnrolledAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Enrollments::CompletedAt).timestamp_with_time_zone())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_enrollments_user")
                                .from(Enrollments::Table, Enrollments::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_enrollments_course")
                                .from(Enrollments::Table, Enrollments::CourseId)
                                .to(Courses::Table, Courses::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_enrollments_user_course")
                        .table(Enrollments::Table)
                        .col(Enrollments::UserId)
                        .col(Enrollments::CourseId)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    Category,
    CreatedAt,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    UserId,
    CourseId,
    Progress,
    Completed,
    EnrolledAt,
    CompletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
