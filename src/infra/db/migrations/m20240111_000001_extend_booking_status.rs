//! Migration: Extend the booking status enum with Completed.
//!
//! MySQL enum extension is not expressible through the schema builder,
//! so this issues a raw ALTER ... MODIFY. MODIFY to the same definition
//! is harmless, which keeps the migration re-runnable.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE mentor_bookings \
                 MODIFY COLUMN status \
                 ENUM('Pending', 'Confirmed', 'Cancelled', 'Completed') \
                 NOT NULL DEFAULT 'Pending'",
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Narrowing the enum would fail on rows already marked Completed;
        // reset them to Cancelled first.
        let conn = manager.get_connection();
        conn.execute_unprepared(
            "UPDATE mentor_bookings SET status = 'Cancelled' WHERE status = 'Completed'",
        )
        .await?;
        conn.execute_unprepared(
            "ALTER TABLE mentor_bookings \
             MODIFY COLUMN status \
             ENUM('Pending', 'Confirmed', 'Cancelled') \
             NOT NULL DEFAULT 'Pending'",
        )
        .await?;
        Ok(())
    }
}
