//! Coding repository - persistence for questions, test cases and
//! submissions.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::AppResult;
use crate::infra::entities::question::{self, Entity as QuestionEntity};
use crate::infra::entities::submission::{self, Entity as SubmissionEntity};
use crate::infra::entities::test_case::{self, Entity as TestCaseEntity};

/// Coding-platform persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait CodingRepository: Send + Sync {
    /// List all questions
    async fn list_questions(&self) -> AppResult<Vec<question::Model>>;

    /// Find question by primary key
    async fn find_question(&self, id: i32) -> AppResult<Option<question::Model>>;

    /// Visible (non-hidden) cases, shown to users as examples
    async fn visible_cases(&self, question_id: i32) -> AppResult<Vec<test_case::Model>>;

    /// All cases including hidden, used for judging
    async fn all_cases(&self, question_id: i32) -> AppResult<Vec<test_case::Model>>;

    /// Record a submission with its verdict
    async fn record_submission(
        &self,
        user_id: i32,
        question_id: i32,
        language: String,
        source_code: String,
        verdict: String,
    ) -> AppResult<submission::Model>;

    /// List a user's submissions, newest first
    async fn submissions_for_user(&self, user_id: i32) -> AppResult<Vec<submission::Model>>;
}

/// SeaORM-backed implementation of [`CodingRepository`].
pub struct CodingStore {
    db: DatabaseConnection,
}

impl CodingStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CodingRepository for CodingStore {
    async fn list_questions(&self) -> AppResult<Vec<question::Model>> {
        QuestionEntity::find()
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn find_question(&self, id: i32) -> AppResult<Option<question::Model>> {
        QuestionEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn visible_cases(&self, question_id: i32) -> AppResult<Vec<test_case::Model>> {
        TestCaseEntity::find()
            .filter(test_case::Column::QuestionId.eq(question_id))
            .filter(test_case::Column::IsHidden.eq(false))
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn all_cases(&self, question_id: i32) -> AppResult<Vec<test_case::Model>> {
        TestCaseEntity::find()
            .filter(test_case::Column::QuestionId.eq(question_id))
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn record_submission(
        &self,
        user_id: i32,
        question_id: i32,
        language: String,
        source_code: String,
        verdict: String,
    ) -> AppResult<submission::Model> {
        let model = submission::ActiveModel {
            user_id: Set(user_id),
            question_id: Set(question_id),
            language: Set(language),
            source_code: Set(source_code),
            verdict: Set(verdict),
            submitted_at: Set(Utc::now()),
            ..Default::default()
        };

        model.insert(&self.db).await.map_err(Into::into)
    }

    async fn submissions_for_user(&self, user_id: i32) -> AppResult<Vec<submission::Model>> {
        SubmissionEntity::find()
            .filter(submission::Column::UserId.eq(user_id))
            .order_by_desc(submission::Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}
