//! HTTP request handlers.

pub mod auth_handler;
pub mod coding_handler;
pub mod course_handler;
pub mod feature_handler;
pub mod job_handler;
pub mod mentorship_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use coding_handler::coding_routes;
pub use course_handler::course_routes;
pub use feature_handler::{feature_admin_routes, feature_routes};
pub use job_handler::job_routes;
pub use mentorship_handler::mentorship_routes;
pub use user_handler::user_routes;
