//! User repository - persistence for the users table.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::config::ROLE_STUDENT;
use crate::domain::{User, UserProfile, UserStatus};
use crate::errors::{AppError, AppResult};
use crate::infra::entities::user::{self, Entity as UserEntity};
use crate::types::PaginationParams;

use super::is_duplicate_entry;

/// User persistence operations.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email (emails are unique)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List users, paginated, with the total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Insert a new user with the default role and status
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;

    /// Update display name and profile fields
    async fn update_profile(
        &self,
        id: i32,
        name: Option<String>,
        profile: UserProfile,
    ) -> AppResult<User>;

    /// Replace the stored password hash
    async fn set_password(&self, id: i32, password_hash: String) -> AppResult<()>;

    /// Stamp last_login with the current time
    async fn touch_last_login(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn model_by_id(&self, id: i32) -> AppResult<user::Model> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(result.map(User::from))
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        let paginator = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .paginate(&self.db, params.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let now = Utc::now();
        let model = user::ActiveModel {
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(ROLE_STUDENT.to_string()),
            status: Set(UserStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await.map_err(|e| {
            if is_duplicate_entry(&e) {
                AppError::conflict("User")
            } else {
                e.into()
            }
        })?;

        Ok(User::from(inserted))
    }

    async fn update_profile(
        &self,
        id: i32,
        name: Option<String>,
        profile: UserProfile,
    ) -> AppResult<User> {
        let mut model: user::ActiveModel = self.model_by_id(id).await?.into();

        if let Some(name) = name {
            model.name = Set(name);
        }
        model.bio = Set(profile.bio);
        model.location = Set(profile.location);
        model.github = Set(profile.github);
        model.linkedin = Set(profile.linkedin);
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        Ok(User::from(updated))
    }

    async fn set_password(&self, id: i32, password_hash: String) -> AppResult<()> {
        let mut model: user::ActiveModel = self.model_by_id(id).await?.into();
        model.password_hash = Set(password_hash);
        model.updated_at = Set(Utc::now());
        model.update(&self.db).await?;
        Ok(())
    }

    async fn touch_last_login(&self, id: i32) -> AppResult<()> {
        let mut model: user::ActiveModel = self.model_by_id(id).await?.into();
        model.last_login = Set(Some(Utc::now()));
        model.update(&self.db).await?;
        Ok(())
    }
}
