//! Infrastructure layer: database access, outbound HTTP and SMTP.

pub mod api_client;
pub mod db;
pub mod email;
pub mod entities;
pub mod persistence;
pub mod piston;
pub mod repositories;

pub use api_client::{ApiClient, FileTokenStore, TokenStore};
pub use db::{ColumnInfo, Database, Migrator};
pub use email::Mailer;
pub use persistence::{Persistence, UnitOfWork};
pub use piston::{CodeRunner, PistonClient, RunOutcome};
pub use repositories::{
    CodingRepository, CodingStore, CourseRepository, CourseStore, FeatureFlagRepository,
    FeatureFlagStore, JobRepository, JobStore, MentorshipRepository, MentorshipStore, NewJob,
    UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use piston::MockCodeRunner;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCodingRepository, MockCourseRepository, MockFeatureFlagRepository, MockJobRepository,
    MockMentorshipRepository, MockUserRepository,
};
