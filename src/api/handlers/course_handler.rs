//! Course catalog and enrollment handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::entities::{course, enrollment};
use crate::types::Created;

/// Progress update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProgressRequest {
    /// Completion percentage
    #[validate(range(min = 0, max = 100, message = "Progress must be between 0 and 100"))]
    #[schema(example = 60, minimum = 0, maximum = 100)]
    pub progress: i32,
}

/// Create course routes (all require authentication)
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/enrollments/me", get(my_enrollments))
        .route("/:id", get(get_course))
        .route("/:id/enroll", post(enroll))
        .route("/:id/progress", put(update_progress))
}

/// List the course catalog
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = "Courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Course catalog", body = [course::Model])
    )
)]
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<course::Model>>> {
    Ok(Json(state.services.courses().list_courses().await?))
}

/// Get a course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = course::Model),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<course::Model>> {
    Ok(Json(state.services.courses().get_course(id).await?))
}

/// Enroll in a course. Enrolling twice returns the existing enrollment.
#[utoipa::path(
    post,
    path = "/api/courses/{id}/enroll",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 201, description = "Enrolled", body = enrollment::Model),
        (status = 404, description = "Course not found")
    )
)]
pub async fn enroll(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<Created<enrollment::Model>> {
    let enrollment = state.services.courses().enroll(current_user.id, id).await?;
    Ok(Created(enrollment))
}

/// Update course progress
#[utoipa::path(
    put,
    path = "/api/courses/{id}/progress",
    tag = "Courses",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Course ID")),
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "Progress updated", body = enrollment::Model),
        (status = 404, description = "Not enrolled in this course")
    )
)]
pub async fn update_progress(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ProgressRequest>,
) -> AppResult<Json<enrollment::Model>> {
    let updated = state
        .services
        .courses()
        .update_progress(current_user.id, id, payload.progress)
        .await?;

    Ok(Json(updated))
}

/// List the caller's enrollments
#[utoipa::path(
    get,
    path = "/api/courses/enrollments/me",
    tag = "Courses",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Enrollments", body = [enrollment::Model])
    )
)]
pub async fn my_enrollments(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<enrollment::Model>>> {
    Ok(Json(
        state
            .services
            .courses()
            .my_enrollments(current_user.id)
            .await?,
    ))
}
