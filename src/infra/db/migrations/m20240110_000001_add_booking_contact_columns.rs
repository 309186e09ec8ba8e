//! Migration: Add denormalized contact columns to mentor_bookings.
//!
//! Adds the columns only; old rows are repaired by
//! `ops backfill-booking-contacts`, which copies name/email from users.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_column("mentor_bookings", "user_name").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(MentorBookings::Table)
                        .add_column(ColumnDef::new(MentorBookings::UserName).string_len(255))
                        .to_owned(),
                )
                .await?;
        }
        if !manager.has_column("mentor_bookings", "user_email").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(MentorBookings::Table)
                        .add_column(ColumnDef::new(MentorBookings::UserEmail).string_len(255))
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
                    .table(MentorBookings::Table)
                    .drop_column(MentorBookings::UserName)
                    .drop_column(MentorBookings::UserEmail)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum MentorBookings {
    Table,
    UserName,
    UserEmail,
}
