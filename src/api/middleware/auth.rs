//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, ROLE_ADMIN, ROLE_MENTOR};
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Check if user may act as a mentor.
    pub fn is_mentor(&self) -> bool {
        self.role == ROLE_MENTOR || self.is_admin()
    }
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the CurrentUser into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.services.auth().verify_token(token)?;

    let current_user = CurrentUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require admin role, returns Forbidden error if not admin.
pub fn require_admin(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require mentor (or admin) role.
pub fn require_mentor(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_mentor() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: &str) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "user@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_admin_passes_both_gates() {
        let admin = user_with_role(ROLE_ADMIN);
        assert!(require_admin(&admin).is_ok());
        assert!(require_mentor(&admin).is_ok());
    }

    #[test]
    fn test_mentor_is_not_admin() {
        let mentor = user_with_role(ROLE_MENTOR);
        assert!(require_admin(&mentor).is_err());
        assert!(require_mentor(&mentor).is_ok());
    }

    #[test]
    fn test_student_passes_neither() {
        let student = user_with_role("Student");
        assert!(require_admin(&student).is_err());
        assert!(require_mentor(&student).is_err());
    }
}
