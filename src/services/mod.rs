//! Application services layer - use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the `UnitOfWork` abstraction so tests can substitute mocked
//! repositories.

mod account_service;
mod auth_service;
mod coding_service;
pub mod container;
mod course_service;
mod feature_service;
mod job_service;
mod mentorship_service;

pub use container::{ServiceContainer, Services};

pub use account_service::{AccountManager, AccountService, ResetOutcome};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use coding_service::{
    judge_case, overall_verdict, CodingManager, CodingService, JudgeResult, QuestionDetail, Verdict,
};
pub use course_service::{CourseManager, CourseService};
pub use feature_service::{FeatureManager, FeatureService, SeedReport};
pub use job_service::{JobManager, JobService};
pub use mentorship_service::{BookingStatus, MentorshipManager, MentorshipService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;

/// Unit-of-work stub assembled from mocked repositories.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use std::sync::Arc;

    use crate::infra::repositories::{
        CodingRepository, CourseRepository, FeatureFlagRepository, JobRepository,
        MentorshipRepository, UserRepository,
    };
    use crate::infra::{
        MockCodingRepository, MockCourseRepository, MockFeatureFlagRepository, MockJobRepository,
        MockMentorshipRepository, MockUserRepository, UnitOfWork,
    };

    /// A `UnitOfWork` over mocked repositories. Tests stub only the
    /// repositories they exercise; touching an unstubbed one panics.
    #[derive(Default)]
    pub struct StubUow {
        users: Option<Arc<MockUserRepository>>,
        jobs: Option<Arc<MockJobRepository>>,
        courses: Option<Arc<MockCourseRepository>>,
        coding: Option<Arc<MockCodingRepository>>,
        flags: Option<Arc<MockFeatureFlagRepository>>,
        mentorship: Option<Arc<MockMentorshipRepository>>,
    }

    impl StubUow {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_users(mut self, mock: MockUserRepository) -> Self {
            self.users = Some(Arc::new(mock));
            self
        }

        pub fn with_jobs(mut self, mock: MockJobRepository) -> Self {
            self.jobs = Some(Arc::new(mock));
            self
        }

        pub fn with_courses(mut self, mock: MockCourseRepository) -> Self {
            self.courses = Some(Arc::new(mock));
            self
        }

        pub fn with_coding(mut self, mock: MockCodingRepository) -> Self {
            self.coding = Some(Arc::new(mock));
            self
        }

        pub fn with_flags(mut self, mock: MockFeatureFlagRepository) -> Self {
            self.flags = Some(Arc::new(mock));
            self
        }

        pub fn with_mentorship(mut self, mock: MockMentorshipRepository) -> Self {
            self.mentorship = Some(Arc::new(mock));
            self
        }
    }

    impl UnitOfWork for StubUow {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone().expect("user repository not stubbed")
        }

        fn jobs(&self) -> Arc<dyn JobRepository> {
            self.jobs.clone().expect("job repository not stubbed")
        }

        fn courses(&self) -> Arc<dyn CourseRepository> {
            self.courses.clone().expect("course repository not stubbed")
        }

        fn coding(&self) -> Arc<dyn CodingRepository> {
            self.coding.clone().expect("coding repository not stubbed")
        }

        fn flags(&self) -> Arc<dyn FeatureFlagRepository> {
            self.flags.clone().expect("flag repository not stubbed")
        }

        fn mentorship(&self) -> Arc<dyn MentorshipRepository> {
            self.mentorship
                .clone()
                .expect("mentorship repository not stubbed")
        }
    }
}
