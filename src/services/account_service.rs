//! Account service - user lookup, profile edits and password repair.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, User, UserProfile};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Result of a password reset: whether the account already existed, and
/// the hash it carried before the reset (None for fresh accounts).
#[derive(Debug)]
pub struct ResetOutcome {
    pub user: User,
    pub created: bool,
    pub previous_hash: Option<String>,
}

/// Account operations.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List users, paginated
    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<User>>;

    /// Update display name and profile fields
    async fn update_profile(
        &self,
        id: i32,
        name: Option<String>,
        profile: UserProfile,
    ) -> AppResult<User>;

    /// Set a user's password by email. Creates the account when no user
    /// with that email exists, so the repair is usable on empty
    /// databases too.
    async fn reset_password(&self, email: String, new_password: String) -> AppResult<ResetOutcome>;
}

/// Concrete implementation of AccountService using Unit of Work.
pub struct AccountManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AccountManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AccountService for AccountManager<U> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<User>> {
        let (users, total) = self.uow.users().list(&params).await?;
        Ok(Paginated::new(users, &params, total))
    }

    async fn update_profile(
        &self,
        id: i32,
        name: Option<String>,
        profile: UserProfile,
    ) -> AppResult<User> {
        self.uow.users().update_profile(id, name, profile).await
    }

    async fn reset_password(&self, email: String, new_password: String) -> AppResult<ResetOutcome> {
        let password_hash = Password::new(&new_password)?.into_string();

        match self.uow.users().find_by_email(&email).await? {
            Some(user) => {
                let previous_hash = user.password_hash.clone();
                self.uow
                    .users()
                    .set_password(user.id, password_hash.clone())
                    .await?;

                let mut user = user;
                user.password_hash = password_hash;

                Ok(ResetOutcome {
                    user,
                    created: false,
                    previous_hash: Some(previous_hash),
                })
            }
            None => {
                // Local-part of the email doubles as the display name
                let name = email
                    .split('@')
                    .next()
                    .unwrap_or(email.as_str())
                    .to_string();
                let user = self.uow.users().create(name, email, password_hash).await?;

                Ok(ResetOutcome {
                    user,
                    created: true,
                    previous_hash: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::StubUow;

    #[tokio::test]
    async fn test_reset_replaces_hash_for_existing_user() {
        let mut user = User::sample();
        user.password_hash = Password::new("old-password-1").unwrap().into_string();
        let old_hash = user.password_hash.clone();
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_set_password()
            .withf(move |id, _| *id == user_id)
            .times(1)
            .returning(|_, _| Ok(()));

        let uow = Arc::new(StubUow::new().with_users(users));
        let accounts = AccountManager::new(uow);

        let outcome = accounts
            .reset_password("sample@example.com".into(), "new-password-1".into())
            .await
            .unwrap();

        assert!(!outcome.created);
        assert_eq!(outcome.previous_hash.as_deref(), Some(old_hash.as_str()));

        // The stored hash must verify the new password and reject the old
        let stored = Password::from_hash(outcome.user.password_hash);
        assert!(stored.verify("new-password-1"));
        assert!(!stored.verify("old-password-1"));
    }

    #[tokio::test]
    async fn test_reset_creates_missing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|name, email, _| name == "newcomer" && email == "newcomer@example.com")
            .times(1)
            .returning(|name, email, hash| {
                let mut user = User::sample();
                user.name = name;
                user.email = email;
                user.password_hash = hash;
                Ok(user)
            });

        let uow = Arc::new(StubUow::new().with_users(users));
        let accounts = AccountManager::new(uow);

        let outcome = accounts
            .reset_password("newcomer@example.com".into(), "fresh-password".into())
            .await
            .unwrap();

        assert!(outcome.created);
        assert!(outcome.previous_hash.is_none());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let uow = Arc::new(StubUow::new().with_users(users));
        let accounts = AccountManager::new(uow);

        let result = accounts.get_user(99).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
