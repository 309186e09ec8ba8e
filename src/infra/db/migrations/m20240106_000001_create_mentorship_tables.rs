//! Migration: Create the mentor_bookings and mentorship_sessions tables.
//!
//! Bookings start without the contact columns; those arrive in a later
//! migration, as they did in production. The status enum initially has
//! no Completed value either.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("mentor_bookings").await? {
            manager
                .create_table(
                    Table::create()
                        .table(MentorBookings::Table)
                        .col(
                            ColumnDef::new(MentorBookings::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MentorBookings::UserId).integer().not_null())
                        .col(ColumnDef::new(MentorBookings::MentorId).integer().not_null())
                        .col(
                            ColumnDef::new(MentorBookings::SlotAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MentorBookings::Status)
                                .enumeration(
                                    Alias::new("status"),
                                    [
                                        Alias::new("Pending"),
                                        Alias::new("Confirmed"),
                                        Alias::new("Cancelled"),
                                    ],
                                )
                                .not_null()
                                .default("Pending"),
                        )
                        .col(
                            ColumnDef::new(MentorBookings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_mentor_bookings_user")
                                .from(MentorBookings::Table, MentorBookings::UserId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_mentor_bookings_mentor")
                                .from(MentorBookings::Table, MentorBookings::MentorId)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_table("mentorship_sessions").await? {
            manager
                .create_table(
                    Table::create()
                        .table(MentorshipSessions::Table)
                        .col(
                            ColumnDef::new(MentorshipSessions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(MentorshipSessions::BookingId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MentorshipSessions::HeldAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MentorshipSessions::Notes).text())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_mentorship_sessions_booking")
                                .from(MentorshipSessions::Table, MentorshipSessions::BookingId)
                                .to(MentorBookings::Table, MentorBookings::Id)
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
            .drop_table(Table::drop().table(MentorshipSessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MentorBookings::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MentorBookings {
    Table,
    Id,
    UserId,
    MentorId,
    SlotAt,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum MentorshipSessions {
    Table,
    Id,
    BookingId,
    HeldAt,
    Notes,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
