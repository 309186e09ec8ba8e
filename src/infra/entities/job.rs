//! `jobs` table entity.

use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "jobs")]
#[schema(as = Job)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub company_name: String,
    /// Internship, Full-time, Part-time or Contract
    pub job_type: String,
    /// Onsite, Remote or Hybrid
    pub work_mode: String,
    pub location: Option<String>,
    pub salary_package: Option<String>,
    pub required_skills: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub application_deadline: Option<Date>,
    pub application_link: Option<String>,
    /// Active, Inactive or Closed
    pub status: String,
    pub created_by: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
