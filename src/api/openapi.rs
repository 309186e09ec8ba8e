//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, coding_handler, course_handler, feature_handler, job_handler,
    mentorship_handler, user_handler,
};
use crate::domain::{UserProfile, UserResponse, UserRole};
use crate::infra::entities::{
    course, enrollment, feature_flag, job, job_application, mentor_booking, mentorship_session,
    question, submission, test_case,
};
use crate::infra::NewJob;
use crate::services::{JudgeResult, QuestionDetail, TokenResponse, Verdict};
use crate::types::{MessageResponse, PaginationMeta};

/// OpenAPI documentation for the Student Hub API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Hub API",
        version = "0.1.0",
        description = "Student portal: accounts, jobs, courses, coding practice, feature flags and mentorship"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        user_handler::get_current_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_profile,
        job_handler::list_jobs,
        job_handler::get_job,
        job_handler::create_job,
        job_handler::apply,
        job_handler::my_applications,
        course_handler::list_courses,
        course_handler::get_course,
        course_handler::enroll,
        course_handler::update_progress,
        course_handler::my_enrollments,
        coding_handler::list_questions,
        coding_handler::get_question,
        coding_handler::run_code,
        coding_handler::submit,
        coding_handler::my_submissions,
        feature_handler::list_flags,
        feature_handler::toggle_flag,
        mentorship_handler::book,
        mentorship_handler::my_bookings,
        mentorship_handler::set_status,
        mentorship_handler::record_session,
    ),
    components(
        schemas(
            UserRole,
            UserProfile,
            UserResponse,
            TokenResponse,
            MessageResponse,
            PaginationMeta,
            NewJob,
            job::Model,
            job_application::Model,
            course::Model,
            enrollment::Model,
            question::Model,
            test_case::Model,
            submission::Model,
            feature_flag::Model,
            mentor_booking::Model,
            mentorship_session::Model,
            QuestionDetail,
            JudgeResult,
            Verdict,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            user_handler::UpdateProfileRequest,
            course_handler::ProgressRequest,
            coding_handler::RunRequest,
            coding_handler::RunResponse,
            coding_handler::SubmitRequest,
            coding_handler::SubmitResponse,
            feature_handler::ToggleRequest,
            mentorship_handler::BookRequest,
            mentorship_handler::StatusRequest,
            mentorship_handler::SessionRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "Account and profile operations"),
        (name = "Jobs", description = "Job postings and applications"),
        (name = "Courses", description = "Course catalog and enrollment"),
        (name = "Coding", description = "Practice questions and code execution"),
        (name = "Features", description = "Feature flags"),
        (name = "Mentorship", description = "Mentor bookings and sessions")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
