//! Coding platform handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::entities::{question, submission};
use crate::services::{JudgeResult, QuestionDetail};

/// Ad-hoc run request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RunRequest {
    /// Language name (python, javascript, java, cpp, c)
    #[validate(length(min = 1, message = "Language is required"))]
    #[schema(example = "python")]
    pub language: String,
    /// Source code to execute
    #[validate(length(min = 1, message = "Source code is required"))]
    pub source_code: String,
    /// Standard input for the run
    #[serde(default)]
    pub stdin: String,
}

/// Captured output of an ad-hoc run
#[derive(Debug, Serialize, ToSchema)]
pub struct RunResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

/// Submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitRequest {
    pub question_id: i32,
    #[validate(length(min = 1, message = "Language is required"))]
    #[schema(example = "python")]
    pub language: String,
    #[validate(length(min = 1, message = "Source code is required"))]
    pub source_code: String,
}

/// Verdict plus the recorded submission
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub submission: submission::Model,
    pub result: JudgeResult,
}

/// Create coding routes (all require authentication)
pub fn coding_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions))
        .route("/questions/:id", get(get_question))
        .route("/run", post(run_code))
        .route("/submit", post(submit))
        .route("/submissions/me", get(my_submissions))
}

/// List practice questions
#[utoipa::path(
    get,
    path = "/api/coding/questions",
    tag = "Coding",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All questions", body = [question::Model])
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<question::Model>>> {
    Ok(Json(state.services.coding().list_questions().await?))
}

/// Get a question with its example cases. Hidden cases are never
/// returned.
#[utoipa::path(
    get,
    path = "/api/coding/questions/{id}",
    tag = "Coding",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Question ID")),
    responses(
        (status = 200, description = "Question with examples", body = QuestionDetail),
        (status = 404, description = "Question not found")
    )
)]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<QuestionDetail>> {
    Ok(Json(state.services.coding().get_question(id).await?))
}

/// Run code against arbitrary stdin without judging
#[utoipa::path(
    post,
    path = "/api/coding/run",
    tag = "Coding",
    security(("bearer_auth" = [])),
    request_body = RunRequest,
    responses(
        (status = 200, description = "Captured output", body = RunResponse),
        (status = 400, description = "Unsupported language")
    )
)]
pub async fn run_code(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RunRequest>,
) -> AppResult<Json<RunResponse>> {
    let outcome = state
        .services
        .coding()
        .run_code(&payload.language, &payload.source_code, &payload.stdin)
        .await?;

    Ok(Json(RunResponse {
        stdout: outcome.stdout,
        stderr: outcome.stderr,
        exit_code: outcome.exit_code,
    }))
}

/// Submit a solution for judging
#[utoipa::path(
    post,
    path = "/api/coding/submit",
    tag = "Coding",
    security(("bearer_auth" = [])),
    request_body = SubmitRequest,
    responses(
        (status = 200, description = "Judged and recorded", body = SubmitResponse),
        (status = 404, description = "Question not found")
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<SubmitRequest>,
) -> AppResult<Json<SubmitResponse>> {
    let (submission, result) = state
        .services
        .coding()
        .submit(
            current_user.id,
            payload.question_id,
            payload.language,
            payload.source_code,
        )
        .await?;

    Ok(Json(SubmitResponse { submission, result }))
}

/// List the caller's submissions
#[utoipa::path(
    get,
    path = "/api/coding/submissions/me",
    tag = "Coding",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Submissions, newest first", body = [submission::Model])
    )
)]
pub async fn my_submissions(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<submission::Model>>> {
    Ok(Json(
        state
            .services
            .coding()
            .my_submissions(current_user.id)
            .await?,
    ))
}
