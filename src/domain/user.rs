//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_MENTOR, ROLE_STUDENT};

/// User roles enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserRole {
    Student,
    Mentor,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role may host mentorship sessions
    pub fn is_mentor(&self) -> bool {
        matches!(self, UserRole::Mentor | UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            ROLE_MENTOR => UserRole::Mentor,
            _ => UserRole::Student,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Student => ROLE_STUDENT,
            UserRole::Mentor => ROLE_MENTOR,
            UserRole::Admin => ROLE_ADMIN,
        };
        write!(f, "{}", s)
    }
}

/// Account status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UserStatus {
    Active,
    Suspended,
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            "Suspended" => UserStatus::Suspended,
            _ => UserStatus::Active,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

/// Optional profile fields added to the users table post-launch
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub profile: UserProfile,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if the account may log in
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Fixture user for tests.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn sample() -> Self {
        let now = Utc::now();
        Self {
            id: 42,
            email: "sample@example.com".to_string(),
            password_hash: String::new(),
            name: "Sample User".to_string(),
            role: UserRole::Student,
            status: UserStatus::Active,
            profile: UserProfile::default(),
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 42)]
    pub id: i32,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User role
    #[schema(example = "Student")]
    pub role: String,
    /// Account status
    #[schema(example = "Active")]
    pub status: String,
    /// Optional profile fields
    pub profile: UserProfile,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
            status: user.status.to_string(),
            profile: user.profile,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Student, UserRole::Mentor, UserRole::Admin] {
            assert_eq!(UserRole::from(role.to_string().as_str()), role);
        }
    }

    #[test]
    fn test_unknown_role_defaults_to_student() {
        assert_eq!(UserRole::from("moderator"), UserRole::Student);
    }

    #[test]
    fn test_admin_is_mentor_capable() {
        assert!(UserRole::Admin.is_mentor());
        assert!(!UserRole::Student.is_mentor());
    }
}
