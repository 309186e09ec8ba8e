//! Unit of Work - centralized repository access.
//!
//! Services depend on this trait rather than on individual stores, which
//! keeps construction in one place. There is deliberately no transaction
//! machinery: every statement commits independently, matching the
//! operational model of the portal's scripts.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    CodingRepository, CodingStore, CourseRepository, CourseStore, FeatureFlagRepository,
    FeatureFlagStore, JobRepository, JobStore, MentorshipRepository, MentorshipStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get job repository
    fn jobs(&self) -> Arc<dyn JobRepository>;

    /// Get course repository
    fn courses(&self) -> Arc<dyn CourseRepository>;

    /// Get coding repository
    fn coding(&self) -> Arc<dyn CodingRepository>;

    /// Get feature-flag repository
    fn flags(&self) -> Arc<dyn FeatureFlagRepository>;

    /// Get mentorship repository
    fn mentorship(&self) -> Arc<dyn MentorshipRepository>;
}

/// Concrete implementation of UnitOfWork over one database connection.
pub struct Persistence {
    user_repo: Arc<UserStore>,
    job_repo: Arc<JobStore>,
    course_repo: Arc<CourseStore>,
    coding_repo: Arc<CodingStore>,
    flag_repo: Arc<FeatureFlagStore>,
    mentorship_repo: Arc<MentorshipStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            job_repo: Arc::new(JobStore::new(db.clone())),
            course_repo: Arc::new(CourseStore::new(db.clone())),
            coding_repo: Arc::new(CodingStore::new(db.clone())),
            flag_repo: Arc::new(FeatureFlagStore::new(db.clone())),
            mentorship_repo: Arc::new(MentorshipStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn jobs(&self) -> Arc<dyn JobRepository> {
        self.job_repo.clone()
    }

    fn courses(&self) -> Arc<dyn CourseRepository> {
        self.course_repo.clone()
    }

    fn coding(&self) -> Arc<dyn CodingRepository> {
        self.coding_repo.clone()
    }

    fn flags(&self) -> Arc<dyn FeatureFlagRepository> {
        self.flag_repo.clone()
    }

    fn mentorship(&self) -> Arc<dyn MentorshipRepository> {
        self.mentorship_repo.clone()
    }
}
