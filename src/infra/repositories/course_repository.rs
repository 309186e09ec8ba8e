//! Course repository - persistence for courses and enrollments.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::AppResult;
use crate::infra::entities::course::{self, Entity as CourseEntity};
use crate::infra::entities::enrollment::{self, Entity as EnrollmentEntity};

use super::is_duplicate_entry;

/// Course persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// List the course catalog
    async fn list(&self) -> AppResult<Vec<course::Model>>;

    /// Find course by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<course::Model>>;

    /// Enroll a user; re-enrolling returns the existing row unchanged
    async fn enroll(&self, user_id: i32, course_id: i32) -> AppResult<enrollment::Model>;

    /// Find a user's enrollment in a course
    async fn find_enrollment(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> AppResult<Option<enrollment::Model>>;

    /// Store updated progress fields on an enrollment
    async fn save_enrollment(&self, model: enrollment::ActiveModel)
        -> AppResult<enrollment::Model>;

    /// List a user's enrollments
    async fn enrollments_for_user(&self, user_id: i32) -> AppResult<Vec<enrollment::Model>>;
}

/// SeaORM-backed implementation of [`CourseRepository`].
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn list(&self) -> AppResult<Vec<course::Model>> {
        CourseEntity::find()
            .order_by_asc(course::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<course::Model>> {
        CourseEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn enroll(&self, user_id: i32, course_id: i32) -> AppResult<enrollment::Model> {
        let model = enrollment::ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            progress: Set(0),
            completed: Set(false),
            enrolled_at: Set(Utc::now()),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(inserted) => Ok(inserted),
            // Unique user+course: enrolling twice is a no-op
            Err(e) if is_duplicate_entry(&e) => self
                .find_enrollment(user_id, course_id)
                .await?
                .ok_or_else(|| e.into()),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_enrollment(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> AppResult<Option<enrollment::Model>> {
        EnrollmentEntity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn save_enrollment(
        &self,
        model: enrollment::ActiveModel,
    ) -> AppResult<enrollment::Model> {
        model.update(&self.db).await.map_err(Into::into)
    }

    async fn enrollments_for_user(&self, user_id: i32) -> AppResult<Vec<enrollment::Model>> {
        EnrollmentEntity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .order_by_asc(enrollment::Column::CourseId)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}
