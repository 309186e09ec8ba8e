//! Job repository - persistence for jobs and job applications.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::infra::entities::job::{self, Entity as JobEntity};
use crate::infra::entities::job_application::{self, Entity as JobApplicationEntity};

use super::is_duplicate_entry;

/// Fields for a new job posting
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewJob {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    /// Internship, Full-time, Part-time or Contract
    pub job_type: String,
    /// Onsite, Remote or Hybrid
    pub work_mode: String,
    pub location: Option<String>,
    pub salary_package: Option<String>,
    pub required_skills: Option<String>,
    pub description: Option<String>,
    pub application_deadline: Option<NaiveDate>,
    pub application_link: Option<String>,
}

/// Job persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// List postings with Active status, newest first
    async fn list_active(&self) -> AppResult<Vec<job::Model>>;

    /// Find posting by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<job::Model>>;

    /// Insert a new posting
    async fn create(&self, data: NewJob, created_by: String) -> AppResult<job::Model>;

    /// Record an application; duplicate user+job pairs are a conflict
    async fn apply(&self, user_id: i32, job_id: i32) -> AppResult<job_application::Model>;

    /// List a user's applications
    async fn applications_for_user(&self, user_id: i32) -> AppResult<Vec<job_application::Model>>;
}

/// SeaORM-backed implementation of [`JobRepository`].
pub struct JobStore {
    db: DatabaseConnection,
}

impl JobStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobRepository for JobStore {
    async fn list_active(&self) -> AppResult<Vec<job::Model>> {
        JobEntity::find()
            .filter(job::Column::Status.eq("Active"))
            .order_by_desc(job::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<job::Model>> {
        JobEntity::find_by_id(id).one(&self.db).await.map_err(Into::into)
    }

    async fn create(&self, data: NewJob, created_by: String) -> AppResult<job::Model> {
        let now = Utc::now();
        let model = job::ActiveModel {
            title: Set(data.title),
            company_name: Set(data.company_name),
            job_type: Set(data.job_type),
            work_mode: Set(data.work_mode),
            location: Set(data.location),
            salary_package: Set(data.salary_package),
            required_skills: Set(data.required_skills),
            description: Set(data.description),
            application_deadline: Set(data.application_deadline),
            application_link: Set(data.application_link),
            status: Set("Active".to_string()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(Into::into)
    }

    async fn apply(&self, user_id: i32, job_id: i32) -> AppResult<job_application::Model> {
        let model = job_application::ActiveModel {
            user_id: Set(user_id),
            job_id: Set(job_id),
            applied_at: Set(Utc::now()),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(|e| {
            if is_duplicate_entry(&e) {
                AppError::conflict("Application")
            } else {
                e.into()
            }
        })
    }

    async fn applications_for_user(&self, user_id: i32) -> AppResult<Vec<job_application::Model>> {
        JobApplicationEntity::find()
            .filter(job_application::Column::UserId.eq(user_id))
            .order_by_desc(job_application::Column::AppliedAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}
