//! Course service - catalog, enrollment and progress tracking.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::Set;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::entities::{course, enrollment};
use crate::infra::UnitOfWork;

/// Course operations.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// List the course catalog
    async fn list_courses(&self) -> AppResult<Vec<course::Model>>;

    /// Get a course by ID
    async fn get_course(&self, id: i32) -> AppResult<course::Model>;

    /// Enroll a user in a course; enrolling twice is a no-op and
    /// returns the existing enrollment
    async fn enroll(&self, user_id: i32, course_id: i32) -> AppResult<enrollment::Model>;

    /// Set progress (0-100). Reaching 100 marks the enrollment
    /// completed and stamps `completed_at`.
    async fn update_progress(
        &self,
        user_id: i32,
        course_id: i32,
        progress: i32,
    ) -> AppResult<enrollment::Model>;

    /// List the caller's enrollments
    async fn my_enrollments(&self, user_id: i32) -> AppResult<Vec<enrollment::Model>>;
}

/// Concrete implementation of CourseService using Unit of Work.
pub struct CourseManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CourseManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CourseService for CourseManager<U> {
    async fn list_courses(&self) -> AppResult<Vec<course::Model>> {
        self.uow.courses().list().await
    }

    async fn get_course(&self, id: i32) -> AppResult<course::Model> {
        self.uow
            .courses()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn enroll(&self, user_id: i32, course_id: i32) -> AppResult<enrollment::Model> {
        // Enrollment in a course that doesn't exist must not create a row
        self.get_course(course_id).await?;
        self.uow.courses().enroll(user_id, course_id).await
    }

    async fn update_progress(
        &self,
        user_id: i32,
        course_id: i32,
        progress: i32,
    ) -> AppResult<enrollment::Model> {
        if !(0..=100).contains(&progress) {
            return Err(AppError::validation("Progress must be between 0 and 100"));
        }

        let existing = self
            .uow
            .courses()
            .find_enrollment(user_id, course_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let already_completed = existing.completed;
        let mut model: enrollment::ActiveModel = existing.into();
        model.progress = Set(progress);
        if progress == 100 && !already_completed {
            model.completed = Set(true);
            model.completed_at = Set(Some(Utc::now()));
        }

        self.uow.courses().save_enrollment(model).await
    }

    async fn my_enrollments(&self, user_id: i32) -> AppResult<Vec<enrollment::Model>> {
        self.uow.courses().enrollments_for_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockCourseRepository;
    use crate::services::test_support::StubUow;
    use sea_orm::ActiveValue;

    fn existing_enrollment(progress: i32) -> enrollment::Model {
        enrollment::Model {
            id: 5,
            user_id: 7,
            course_id: 3,
            progress,
            completed: false,
            enrolled_at: Utc::now(),
            completed_at: None,
        }
    }

    fn saved_value<T: Clone + Into<sea_orm::Value>>(value: &ActiveValue<T>) -> Option<T> {
        match value {
            ActiveValue::Set(v) => Some(v.clone()),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_progress_updates_without_completion() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_enrollment()
            .returning(|_, _| Ok(Some(existing_enrollment(10))));
        courses.expect_save_enrollment().returning(|model| {
            assert_eq!(saved_value(&model.progress), Some(60));
            assert_eq!(saved_value(&model.completed), None);

            let mut row = existing_enrollment(60);
            row.progress = 60;
            Ok(row)
        });

        let uow = Arc::new(StubUow::new().with_courses(courses));
        let service = CourseManager::new(uow);

        let updated = service.update_progress(7, 3, 60).await.unwrap();
        assert_eq!(updated.progress, 60);
        assert!(!updated.completed);
    }

    #[tokio::test]
    async fn test_full_progress_marks_completed() {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_enrollment()
            .returning(|_, _| Ok(Some(existing_enrollment(80))));
        courses.expect_save_enrollment().returning(|model| {
            assert_eq!(saved_value(&model.progress), Some(100));
            assert_eq!(saved_value(&model.completed), Some(true));
            assert!(saved_value(&model.completed_at).flatten().is_some());

            let mut row = existing_enrollment(100);
            row.progress = 100;
            row.completed = true;
            row.completed_at = Some(Utc::now());
            Ok(row)
        });

        let uow = Arc::new(StubUow::new().with_courses(courses));
        let service = CourseManager::new(uow);

        let updated = service.update_progress(7, 3, 100).await.unwrap();
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_out_of_range_progress_rejected() {
        let uow = Arc::new(StubUow::new().with_courses(MockCourseRepository::new()));
        let service = CourseManager::new(uow);

        assert!(matches!(
            service.update_progress(7, 3, 101).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.update_progress(7, 3, -1).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_enroll_requires_existing_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));
        courses.expect_enroll().times(0);

        let uow = Arc::new(StubUow::new().with_courses(courses));
        let service = CourseManager::new(uow);

        assert!(matches!(
            service.enroll(7, 999).await,
            Err(AppError::NotFound)
        ));
    }
}
