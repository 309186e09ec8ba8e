//! SeaORM entity definitions
//!
//! Database-level models, one per table, separate from the domain layer.
//! Enum-typed columns are stored as their string values; the enum domains
//! are enforced by the migration DDL.

pub mod course;
pub mod enrollment;
pub mod feature_flag;
pub mod job;
pub mod job_application;
pub mod mentor_booking;
pub mod mentorship_session;
pub mod question;
pub mod submission;
pub mod test_case;
pub mod user;
