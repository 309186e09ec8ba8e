//! `mentor_bookings` table entity.
//!
//! The contact columns (`user_name`, `user_email`) were added after
//! launch and may be NULL on old rows; `ops backfill-booking-contacts`
//! repairs them.

use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "mentor_bookings")]
#[schema(as = MentorBooking)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub mentor_id: i32,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub slot_at: DateTimeUtc,
    /// Pending, Confirmed, Cancelled or Completed
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
