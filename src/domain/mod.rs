//! Domain layer - Core business entities and logic
//!
//! Core models representing portal concepts independent of the database
//! schema. Entities with no behavior beyond CRUD live only as SeaORM
//! models under `infra::entities`.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{User, UserProfile, UserResponse, UserRole, UserStatus};
