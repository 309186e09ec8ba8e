//! Mentorship service - bookings, status transitions and held sessions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::entities::{mentor_booking, mentorship_session};
use crate::infra::UnitOfWork;

/// Booking lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(BookingStatus::Pending),
            "Confirmed" => Some(BookingStatus::Confirmed),
            "Cancelled" => Some(BookingStatus::Cancelled),
            "Completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Allowed lifecycle transitions. Terminal states allow none.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

/// Mentorship operations.
#[async_trait]
pub trait MentorshipService: Send + Sync {
    /// Book a mentor slot for a user. Contact details are copied onto
    /// the booking row at creation time.
    async fn book(
        &self,
        user_id: i32,
        mentor_id: i32,
        slot_at: DateTime<Utc>,
    ) -> AppResult<mentor_booking::Model>;

    /// List bookings involving the user (as student or as mentor)
    async fn my_bookings(&self, user_id: i32) -> AppResult<Vec<mentor_booking::Model>>;

    /// Move a booking to a new status, enforcing the lifecycle
    async fn transition(&self, booking_id: i32, status: &str) -> AppResult<mentor_booking::Model>;

    /// Record that a session was held against a confirmed booking, and
    /// complete the booking
    async fn record_session(
        &self,
        booking_id: i32,
        held_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<mentorship_session::Model>;

    /// Copy user contact details onto booking rows that predate the
    /// contact columns; returns the number of rows repaired
    async fn backfill_contacts(&self) -> AppResult<u64>;
}

/// Concrete implementation of MentorshipService using Unit of Work.
pub struct MentorshipManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> MentorshipManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> MentorshipService for MentorshipManager<U> {
    async fn book(
        &self,
        user_id: i32,
        mentor_id: i32,
        slot_at: DateTime<Utc>,
    ) -> AppResult<mentor_booking::Model> {
        let user = self
            .uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let mentor = self
            .uow
            .users()
            .find_by_id(mentor_id)
            .await?
            .ok_or(AppError::NotFound)?;
        if !mentor.role.is_mentor() {
            return Err(AppError::validation("Selected user is not a mentor"));
        }

        self.uow
            .mentorship()
            .create_booking(
                user_id,
                mentor_id,
                slot_at,
                Some(user.name),
                Some(user.email),
            )
            .await
    }

    async fn my_bookings(&self, user_id: i32) -> AppResult<Vec<mentor_booking::Model>> {
        self.uow.mentorship().bookings_for_user(user_id).await
    }

    async fn transition(&self, booking_id: i32, status: &str) -> AppResult<mentor_booking::Model> {
        let next = BookingStatus::parse(status)
            .ok_or_else(|| AppError::validation(format!("Unknown status: {}", status)))?;

        let booking = self
            .uow
            .mentorship()
            .find_booking(booking_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let current = BookingStatus::parse(&booking.status)
            .ok_or_else(|| AppError::internal("Booking carries an unknown status"))?;

        if !current.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "Cannot move a {} booking to {}",
                current.as_str(),
                next.as_str()
            )));
        }

        self.uow
            .mentorship()
            .set_status(booking_id, next.as_str().to_string())
            .await
    }

    async fn record_session(
        &self,
        booking_id: i32,
        held_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> AppResult<mentorship_session::Model> {
        let booking = self
            .uow
            .mentorship()
            .find_booking(booking_id)
            .await?
            .ok_or(AppError::NotFound)?;

        if BookingStatus::parse(&booking.status) != Some(BookingStatus::Confirmed) {
            return Err(AppError::validation(
                "Sessions can only be recorded against confirmed bookings",
            ));
        }

        let session = self
            .uow
            .mentorship()
            .record_session(booking_id, held_at, notes)
            .await?;

        self.uow
            .mentorship()
            .set_status(booking_id, BookingStatus::Completed.as_str().to_string())
            .await?;

        Ok(session)
    }

    async fn backfill_contacts(&self) -> AppResult<u64> {
        self.uow.mentorship().backfill_contacts().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserRole};
    use crate::infra::{MockMentorshipRepository, MockUserRepository};
    use crate::services::test_support::StubUow;

    fn booking(id: i32, status: &str) -> mentor_booking::Model {
        mentor_booking::Model {
            id,
            user_id: 7,
            mentor_id: 8,
            user_name: Some("Sample User".to_string()),
            user_email: Some("sample@example.com".to_string()),
            slot_at: Utc::now(),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_lifecycle_transitions() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Completed));
        assert!(Confirmed.can_transition_to(Cancelled));

        // Terminal states and skips
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Cancelled.can_transition_to(Confirmed));
        assert!(!Completed.can_transition_to(Pending));
    }

    #[tokio::test]
    async fn test_booking_denormalizes_student_contacts() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            let mut user = User::sample();
            user.id = id;
            if id == 8 {
                user.role = UserRole::Mentor;
            }
            Ok(Some(user))
        });

        let mut mentorship = MockMentorshipRepository::new();
        mentorship
            .expect_create_booking()
            .withf(|_, _, _, name, email| {
                name.as_deref() == Some("Sample User")
                    && email.as_deref() == Some("sample@example.com")
            })
            .times(1)
            .returning(|user_id, mentor_id, slot_at, user_name, user_email| {
                Ok(mentor_booking::Model {
                    id: 1,
                    user_id,
                    mentor_id,
                    user_name,
                    user_email,
                    slot_at,
                    status: "Pending".to_string(),
                    created_at: Utc::now(),
                })
            });

        let uow = Arc::new(StubUow::new().with_users(users).with_mentorship(mentorship));
        let service = MentorshipManager::new(uow);

        let created = service.book(7, 8, Utc::now()).await.unwrap();
        assert_eq!(created.status, "Pending");
    }

    #[tokio::test]
    async fn test_booking_requires_mentor_role() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| {
            let mut user = User::sample();
            user.id = id;
            // Both parties are plain students
            Ok(Some(user))
        });

        let uow = Arc::new(
            StubUow::new()
                .with_users(users)
                .with_mentorship(MockMentorshipRepository::new()),
        );
        let service = MentorshipManager::new(uow);

        let result = service.book(7, 9, Utc::now()).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_transition_rejected() {
        let mut mentorship = MockMentorshipRepository::new();
        mentorship
            .expect_find_booking()
            .returning(|id| Ok(Some(booking(id, "Pending"))));
        mentorship.expect_set_status().times(0);

        let uow = Arc::new(StubUow::new().with_mentorship(mentorship));
        let service = MentorshipManager::new(uow);

        let result = service.transition(1, "Completed").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_session_completes_confirmed_booking() {
        let mut mentorship = MockMentorshipRepository::new();
        mentorship
            .expect_find_booking()
            .returning(|id| Ok(Some(booking(id, "Confirmed"))));
        mentorship
            .expect_record_session()
            .times(1)
            .returning(|booking_id, held_at, notes| {
                Ok(mentorship_session::Model {
                    id: 1,
                    booking_id,
                    held_at,
                    notes,
                })
            });
        mentorship
            .expect_set_status()
            .withf(|_, status| status == "Completed")
            .times(1)
            .returning(|id, status| Ok(booking(id, &status)));

        let uow = Arc::new(StubUow::new().with_mentorship(mentorship));
        let service = MentorshipManager::new(uow);

        let session = service.record_session(1, Utc::now(), None).await.unwrap();
        assert_eq!(session.booking_id, 1);
    }

    #[tokio::test]
    async fn test_session_rejected_for_pending_booking() {
        let mut mentorship = MockMentorshipRepository::new();
        mentorship
            .expect_find_booking()
            .returning(|id| Ok(Some(booking(id, "Pending"))));
        mentorship.expect_record_session().times(0);

        let uow = Arc::new(StubUow::new().with_mentorship(mentorship));
        let service = MentorshipManager::new(uow);

        let result = service.record_session(1, Utc::now(), None).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
