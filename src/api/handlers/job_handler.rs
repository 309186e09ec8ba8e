//! Job board handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::entities::{job, job_application};
use crate::infra::NewJob;
use crate::types::Created;

/// Create job routes (all require authentication)
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/applications/me", get(my_applications))
        .route("/:id", get(get_job))
        .route("/:id/apply", post(apply))
}

/// List active job postings
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active postings, newest first", body = [job::Model])
    )
)]
pub async fn list_jobs(State(state): State<AppState>) -> AppResult<Json<Vec<job::Model>>> {
    Ok(Json(state.services.jobs().list_jobs().await?))
}

/// Get a job posting
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Posting found", body = job::Model),
        (status = 404, description = "Posting not found")
    )
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<job::Model>> {
    Ok(Json(state.services.jobs().get_job(id).await?))
}

/// Create a job posting (admin only)
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    request_body = NewJob,
    responses(
        (status = 201, description = "Posting created", body = job::Model),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<NewJob>,
) -> AppResult<Created<job::Model>> {
    require_admin(&current_user)?;

    let posting = state
        .services
        .jobs()
        .create_job(payload, current_user.email)
        .await?;

    Ok(Created(posting))
}

/// Apply to a job posting
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 201, description = "Application recorded", body = job_application::Model),
        (status = 404, description = "Posting not found"),
        (status = 409, description = "Already applied")
    )
)]
pub async fn apply(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<Created<job_application::Model>> {
    let application = state.services.jobs().apply(current_user.id, id).await?;
    Ok(Created(application))
}

/// List the caller's applications
#[utoipa::path(
    get,
    path = "/api/jobs/applications/me",
    tag = "Jobs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications, newest first", body = [job_application::Model])
    )
)]
pub async fn my_applications(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<job_application::Model>>> {
    Ok(Json(
        state
            .services
            .jobs()
            .my_applications(current_user.id)
            .await?,
    ))
}
