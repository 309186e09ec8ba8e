//! Authentication service.
//!
//! Registration, login and JWT verification. Password hashing lives in
//! the domain `Password` value object; this service only orchestrates.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication operations.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Login and return JWT token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a JWT for a user
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Email format is validated by the handler's ValidatedJson extractor
        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.uow.users().create(name, email, password_hash).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_email(&email).await?;

        // SECURITY: verify against a dummy hash when the user doesn't
        // exist so response timing can't enumerate valid emails.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        let user = user_result.as_ref().unwrap();
        self.uow.users().touch_last_login(user.id).await?;

        generate_token(user, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::test_support::StubUow;

    fn test_config() -> Config {
        std::env::set_var("JWT_SECRET", "test-secret-key-of-sufficient-len!");
        Config::from_env()
    }

    fn sample_user(password: &str) -> User {
        let mut user = User::sample();
        user.password_hash = Password::new(password).unwrap().into_string();
        user
    }

    #[tokio::test]
    async fn test_login_returns_bearer_token_and_stamps_last_login() {
        let user = sample_user("correct-horse-battery");
        let user_id = user.id;

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        users
            .expect_touch_last_login()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let uow = Arc::new(StubUow::new().with_users(users));
        let auth = Authenticator::new(uow, test_config());

        let response = auth
            .login("sample@example.com".into(), "correct-horse-battery".into())
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let user = sample_user("correct-horse-battery");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let uow = Arc::new(StubUow::new().with_users(users));
        let auth = Authenticator::new(uow, test_config());

        let result = auth
            .login("sample@example.com".into(), "wrong".into())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let uow = Arc::new(StubUow::new().with_users(users));
        let auth = Authenticator::new(uow, test_config());

        let result = auth
            .login("nobody@example.com".into(), "whatever".into())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let user = sample_user("irrelevant");

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let uow = Arc::new(StubUow::new().with_users(users));
        let auth = Authenticator::new(uow, test_config());

        let result = auth
            .register("Dup".into(), "sample@example.com".into(), "password123".into())
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_issued_token_verifies_with_expected_claims() {
        let user = sample_user("correct-horse-battery");
        let user_id = user.id;
        let email = user.email.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        users.expect_touch_last_login().returning(|_| Ok(()));

        let uow = Arc::new(StubUow::new().with_users(users));
        let auth = Authenticator::new(uow, test_config());

        let response = auth
            .login(email.clone(), "correct-horse-battery".into())
            .await
            .unwrap();

        let claims = auth.verify_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, email);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let uow = Arc::new(StubUow::new());
        let auth = Authenticator::new(uow, test_config());

        assert!(auth.verify_token("not.a.jwt").is_err());
    }
}
