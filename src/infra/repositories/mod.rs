//! Repository layer - Data access abstraction
//!
//! One trait + SeaORM store per aggregate. Services depend on the traits
//! only, which keeps them mockable in unit tests.

mod coding_repository;
mod course_repository;
mod feature_flag_repository;
mod job_repository;
mod mentorship_repository;
mod user_repository;

pub use coding_repository::{CodingRepository, CodingStore};
pub use course_repository::{CourseRepository, CourseStore};
pub use feature_flag_repository::{FeatureFlagRepository, FeatureFlagStore};
pub use job_repository::{JobRepository, JobStore, NewJob};
pub use mentorship_repository::{MentorshipRepository, MentorshipStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use coding_repository::MockCodingRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use feature_flag_repository::MockFeatureFlagRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use job_repository::MockJobRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mentorship_repository::MockMentorshipRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

use sea_orm::DbErr;

/// MySQL unique-violation detection (error 1062). Used to turn duplicate
/// inserts into domain-level conflicts instead of opaque database errors.
pub(crate) fn is_duplicate_entry(err: &DbErr) -> bool {
    err.to_string().contains("Duplicate entry")
}
