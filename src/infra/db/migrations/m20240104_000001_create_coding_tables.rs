//! Migration: Create the coding-practice tables (questions, test_cases,
//! submissions).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("questions").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Questions::Table)
                        .col(
                            ColumnDef::new(Questions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Questions::Title).string_len(255).not_null())
                        .col(ColumnDef::new(Questions::Description).text().not_null())
                        .col(
                            ColumnDef::new(Questions::Difficulty)
                                .enumeration(
                                    Alias::new("difficulty"),
                                    [
                                        Alias::new("Easy"),
                                        Alias::new("Medium"),
                                        Alias::new("Hard"),
                                    ],
                                )
                                .not_null()
                                .default("Easy"),
                        )
                        .col(
                            ColumnDef::new(Questions::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("test_cases").await? {
            manager
                .create_table(
                    Table::create()
                        .table(TestCases::Table)
                        .col(
                            ColumnDef::new(TestCases::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TestCases::QuestionId).integer().not_null())
                        .col(ColumnDef::new(TestCases::Input).text().not_null())
                        .col(ColumnDef::new(TestCases::ExpectedOutput).text().not_null())
                        .col(
                            ColumnDef::new(TestCases::IsHidden)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_test_cases_question")
                                .from(TestCases::Table, TestCases::QuestionId)
                                .to(Questions::Table, Questions::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("submissions").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Submissions::Table)
                        .col(
                            ColumnDef::new(Submissions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Submissions::UserId).integer().not_null())
                        .col(ColumnDef::new(Submissions::QuestionId).integer().not_null())
                        .col(ColumnDef::new(Submissions::Language).string_len(50).not_null())
                        .col(ColumnDef::new(Submissions::SourceCode).text().not_null())
                        .col(
                            ColumnDef::new(Submissions::Verdict)
                                .enumeration(
                                    Alias::new("verdict"),
                                    [
                                        Alias::new("Pending"),
                                        Alias::new("Accepted"),
                                        Alias::new("WrongAnswer"),
                                        Alias::new("Error"),
                                    ],
                                )
                                .not_null()
                                .default("Pending"),
                        )
                        .col(
                            ColumnDef::new(Submissions::SubmittedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_submissions_user")
                                .from(Submissions::Table, Submissions::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_submissions_question")
                                .from(Submissions::Table, Submissions::QuestionId)
                                .to(Questions::Table, Questions::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TestCases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    Title,
    Description,
    Difficulty,
    CreatedAt,
}

#[derive(Iden)]
enum TestCases {
    Table,
    Id,
    QuestionId,
    Input,
    ExpectedOutput,
    IsHidden,
}

#[derive(Iden)]
enum Submissions {
    Table,
    Id,
    UserId,
    QuestionId,
    Language,
    SourceCode,
    Verdict,
    SubmittedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
