//! Service container - centralized service construction and access.
//!
//! Handlers depend on the `ServiceContainer` trait; tests substitute a
//! mock container without touching the database.

use std::sync::Arc;

use super::{
    AccountService, AuthService, CodingService, CourseService, FeatureService, JobService,
    MentorshipService,
};
use crate::config::Config;
use crate::infra::{Persistence, PistonClient};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get job service
    fn jobs(&self) -> Arc<dyn JobService>;

    /// Get course service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get coding service
    fn coding(&self) -> Arc<dyn CodingService>;

    /// Get feature-flag service
    fn features(&self) -> Arc<dyn FeatureService>;

    /// Get mentorship service
    fn mentorship(&self) -> Arc<dyn MentorshipService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    account_service: Arc<dyn AccountService>,
    job_service: Arc<dyn JobService>,
    course_service: Arc<dyn CourseService>,
    coding_service: Arc<dyn CodingService>,
    feature_service: Arc<dyn FeatureService>,
    mentorship_service: Arc<dyn MentorshipService>,
}

impl Services {
    /// Create service container from a database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{
            AccountManager, Authenticator, CodingManager, CourseManager, FeatureManager,
            JobManager, MentorshipManager,
        };

        let uow = Arc::new(Persistence::new(db));
        let runner = Arc::new(PistonClient::new());

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            account_service: Arc::new(AccountManager::new(uow.clone())),
            job_service: Arc::new(JobManager::new(uow.clone())),
            course_service: Arc::new(CourseManager::new(uow.clone())),
            coding_service: Arc::new(CodingManager::new(uow.clone(), runner)),
            feature_service: Arc::new(FeatureManager::new(uow.clone())),
            mentorship_service: Arc::new(MentorshipManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn jobs(&self) -> Arc<dyn JobService> {
        self.job_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn coding(&self) -> Arc<dyn CodingService> {
        self.coding_service.clone()
    }

    fn features(&self) -> Arc<dyn FeatureService> {
        self.feature_service.clone()
    }

    fn mentorship(&self) -> Arc<dyn MentorshipService> {
        self.mentorship_service.clone()
    }
}
