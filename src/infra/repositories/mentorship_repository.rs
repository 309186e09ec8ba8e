//! Mentorship repository - persistence for bookings and sessions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement,
};

use crate::errors::{AppError, AppResult};
use crate::infra::entities::mentor_booking::{self, Entity as MentorBookingEntity};
use crate::infra::entities::mentorship_session;

/// Mentorship persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait MentorshipRepository: Send + Sync {
    /// Create a Pending booking, denormalizing the user's contact details
    async fn create_booking(
        &self,
        user_id: i32,
        mentor_id: i32,
        slot_at: DateTime<Utc>,
        user_name: Option<String>,
        user_email: Option<String>,
    ) -> AppResult<mentor_booking::Model>;

    /// Find booking by primary key
    async fn find_booking(&self, id: i32) -> AppResult<Option<mentor_booking::Model>>;

    /// List bookings where the user is the student or the mentor
    async fn bookings_for_user(&self, user_id: i32) -> AppResult<Vec<mentor_booking::Model>>;

    /// Store a new status on a booking
    async fn set_status(&self, id: i32, status: String) -> AppResult<mentor_booking::Model>;

    /// Record a held session for a booking
    async fn record_session(
        &self,
        booking_id: i32,
        held_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<mentorship_session::Model>;

    /// Copy user name/email onto booking rows where missing; returns the
    /// number of rows repaired
    async fn backfill_contacts(&self) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`MentorshipRepository`].
pub struct MentorshipStore {
    db: DatabaseConnection,
}

impl MentorshipStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MentorshipRepository for MentorshipStore {
    async fn create_booking(
        &self,
        user_id: i32,
        mentor_id: i32,
        slot_at: DateTime<Utc>,
        user_name: Option<String>,
        user_email: Option<String>,
    ) -> AppResult<mentor_booking::Model> {
        let model = mentor_booking::ActiveModel {
            user_id: Set(user_id),
            mentor_id: Set(mentor_id),
            user_name: Set(user_name),
            user_email: Set(user_email),
            slot_at: Set(slot_at),
            status: Set("Pending".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(Into::into)
    }

    async fn find_booking(&self, id: i32) -> AppResult<Option<mentor_booking::Model>> {
        MentorBookingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn bookings_for_user(&self, user_id: i32) -> AppResult<Vec<mentor_booking::Model>> {
        MentorBookingEntity::find()
            .filter(
                mentor_booking::Column::UserId
                    .eq(user_id)
                    .or(mentor_booking::Column::MentorId.eq(user_id)),
            )
            .order_by_desc(mentor_booking::Column::SlotAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn set_status(&self, id: i32, status: String) -> AppResult<mentor_booking::Model> {
        let booking = self.find_booking(id).await?.ok_or(AppError::NotFound)?;

        let mut model: mentor_booking::ActiveModel = booking.into();
        model.status = Set(status);
        model.update(&self.db).await.map_err(Into::into)
    }

    async fn record_session(
        &self,
        booking_id: i32,
        held_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<mentorship_session::Model> {
        let model = mentorship_session::ActiveModel {
            booking_id: Set(booking_id),
            held_at: Set(held_at),
            notes: Set(notes),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(Into::into)
    }

    async fn backfill_contacts(&self) -> AppResult<u64> {
        // Single UPDATE..JOIN; each row commits independently of any
        // caller state, matching the original repair script.
        let result = self
            .db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "UPDATE mentor_bookings mb \
                 JOIN users u ON mb.user_id = u.id \
                 SET mb.user_name = u.name, mb.user_email = u.email \
                 WHERE mb.user_name IS NULL OR mb.user_name = '' \
                    OR mb.user_email IS NULL OR mb.user_email = ''"
                    .to_string(),
            ))
            .await?;

        Ok(result.rows_affected())
    }
}
