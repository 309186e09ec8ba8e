//! `users` table entity.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub last_login: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            email: m.email,
            password_hash: m.password_hash,
            name: m.name,
            role: m.role.as_str().into(),
            status: m.status.as_str().into(),
            profile: UserProfile {
                bio: m.bio,
                location: m.location,
                github: m.github,
                linkedin: m.linkedin,
            },
            last_login: m.last_login,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
