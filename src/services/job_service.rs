//! Job service - postings and applications.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::entities::{job, job_application};
use crate::infra::{NewJob, UnitOfWork};

/// Job-board operations.
#[async_trait]
pub trait JobService: Send + Sync {
    /// List active postings, newest first
    async fn list_jobs(&self) -> AppResult<Vec<job::Model>>;

    /// Get a posting by ID
    async fn get_job(&self, id: i32) -> AppResult<job::Model>;

    /// Create a posting, recording who posted it
    async fn create_job(&self, data: NewJob, created_by: String) -> AppResult<job::Model>;

    /// Apply to a posting. Applying twice to the same posting is a
    /// conflict.
    async fn apply(&self, user_id: i32, job_id: i32) -> AppResult<job_application::Model>;

    /// List the caller's applications
    async fn my_applications(&self, user_id: i32) -> AppResult<Vec<job_application::Model>>;
}

/// Concrete implementation of JobService using Unit of Work.
pub struct JobManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> JobManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> JobService for JobManager<U> {
    async fn list_jobs(&self) -> AppResult<Vec<job::Model>> {
        self.uow.jobs().list_active().await
    }

    async fn get_job(&self, id: i32) -> AppResult<job::Model> {
        self.uow
            .jobs()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create_job(&self, data: NewJob, created_by: String) -> AppResult<job::Model> {
        self.uow.jobs().create(data, created_by).await
    }

    async fn apply(&self, user_id: i32, job_id: i32) -> AppResult<job_application::Model> {
        // The posting must exist and still be accepting applications
        let posting = self.get_job(job_id).await?;
        if posting.status != "Active" {
            return Err(AppError::validation("This posting is no longer active"));
        }

        self.uow.jobs().apply(user_id, job_id).await
    }

    async fn my_applications(&self, user_id: i32) -> AppResult<Vec<job_application::Model>> {
        self.uow.jobs().applications_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockJobRepository;
    use crate::services::test_support::StubUow;
    use chrono::Utc;

    fn posting(id: i32, status: &str) -> job::Model {
        let now = Utc::now();
        job::Model {
            id,
            title: "Backend Intern".to_string(),
            company_name: "Acme".to_string(),
            job_type: "Internship".to_string(),
            work_mode: "Remote".to_string(),
            location: None,
            salary_package: None,
            required_skills: None,
            description: None,
            application_deadline: None,
            application_link: None,
            status: status.to_string(),
            created_by: "admin".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_apply_to_active_posting() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id()
            .returning(|id| Ok(Some(posting(id, "Active"))));
        jobs.expect_apply().times(1).returning(|user_id, job_id| {
            Ok(job_application::Model {
                id: 1,
                user_id,
                job_id,
                applied_at: Utc::now(),
            })
        });

        let uow = Arc::new(StubUow::new().with_jobs(jobs));
        let service = JobManager::new(uow);

        let application = service.apply(7, 3).await.unwrap();
        assert_eq!(application.user_id, 7);
        assert_eq!(application.job_id, 3);
    }

    #[tokio::test]
    async fn test_apply_to_closed_posting_rejected() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id()
            .returning(|id| Ok(Some(posting(id, "Closed"))));
        jobs.expect_apply().times(0);

        let uow = Arc::new(StubUow::new().with_jobs(jobs));
        let service = JobManager::new(uow);

        let result = service.apply(7, 3).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_apply_to_missing_posting_is_not_found() {
        let mut jobs = MockJobRepository::new();
        jobs.expect_find_by_id().returning(|_| Ok(None));

        let uow = Arc::new(StubUow::new().with_jobs(jobs));
        let service = JobManager::new(uow);

        let result = service.apply(7, 999).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
