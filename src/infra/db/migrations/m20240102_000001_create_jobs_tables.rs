//! Migration: Create the jobs and job_applications tables.
//!
//! Applications are unique per user+job.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("jobs").await? {
            manager
                .create_table(
                    Table::create()
                        .table(Jobs::Table)
                        .col(
                            ColumnDef::new(Jobs::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Jobs::Title).string_len(150).not_null())
                        .col(ColumnDef::new(Jobs::CompanyName).string_len(150).not_null())
                        .col(
                            ColumnDef::new(Jobs::JobType)
                                .enumeration(
                                    Alias::new("job_type"),
                                    [
                                        Alias::new("Internship"),
                                        Alias::new("Full-time"),
                                        Alias::new("Part-time"),
                                        Alias::new("Contract"),
                                    ],
                                )
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Jobs::WorkMode)
                                .enumeration(
                                    Alias::new("work_mode"),
                                    [
                                        Alias::new("Onsite"),
                                        Alias::new("Remote"),
                                        Alias::new("Hybrid"),
                                    ],
                                )
                                .not_null(),
                        )
                        .col(ColumnDef::new(Jobs::Location).string_len(150))
                        .col(ColumnDef::new(Jobs::SalaryPackage).string_len(100))
                        .col(ColumnDef::new(Jobs::RequiredSkills).string_len(255))
                        .col(ColumnDef::new(Jobs::Description).text())
                        .col(ColumnDef::new(Jobs::ApplicationDeadline).date())
                        .col(ColumnDef::new(Jobs::ApplicationLink).string_len(255))
                        .col(
                            ColumnDef::new(Jobs::Status)
                                .enumeration(
                                    Alias::new("status"),
                                    [
                                        Alias::new("Active"),
                                        Alias::new("Inactive"),
                                        Alias::new("Closed"),
                                    ],
                                )
                                .not_null()
                                .default("Active"),
                        )
                        .col(
                            ColumnDef::new(Jobs::CreatedBy)
                                .string_len(100)
                                .not_null()
                                .default("Admin"),
                        )
                        .col(
                            ColumnDef::new(Jobs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Jobs::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("job_applications").await? {
            manager
                .create_table(
                    Table::create()
                        .table(JobApplications::Table)
                        .col(
                            ColumnDef::new(JobApplications::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(JobApplications::UserId).integer().not_null())
                        .col(ColumnDef::new(JobApplications::JobId).integer().not_null())
                        .col(
                            ColumnDef::new(JobApplications::AppliedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_job_applications_user")
                                .from(JobApplications::Table, JobApplications::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_job_applications_job")
                                .from(JobApplications::Table, JobApplications::JobId)
                                .to(Jobs::Table, Jobs::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_job_applications_user_job")
                        .table(JobApplications::Table)
                        .col(JobApplications::UserId)
                        .col(JobApplications::JobId)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    Title,
    CompanyName,
    JobType,
    WorkMode,
    Location,
    SalaryPackage,
    RequiredSkills,
    Description,
    ApplicationDeadline,
    ApplicationLink,
    Status,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum JobApplications {
    Table,
    Id,
    UserId,
    JobId,
    AppliedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
