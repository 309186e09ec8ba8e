//! Mentorship booking handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::middleware::{require_mentor, CurrentUser};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::entities::{mentor_booking, mentorship_session};
use crate::types::Created;

/// Booking request
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRequest {
    pub mentor_id: i32,
    /// Requested slot time
    pub slot_at: DateTime<Utc>,
}

/// Booking status update request
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    /// Confirmed, Cancelled or Completed
    #[schema(example = "Confirmed")]
    pub status: String,
}

/// Session record request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionRequest {
    pub held_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Create mentorship routes (all require authentication)
pub fn mentorship_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(book))
        .route("/bookings/me", get(my_bookings))
        .route("/bookings/:id/status", put(set_status))
        .route("/bookings/:id/session", post(record_session))
}

/// Book a mentor slot
#[utoipa::path(
    post,
    path = "/api/mentorship/bookings",
    tag = "Mentorship",
    security(("bearer_auth" = [])),
    request_body = BookRequest,
    responses(
        (status = 201, description = "Booking created as Pending", body = mentor_booking::Model),
        (status = 400, description = "Selected user is not a mentor"),
        (status = 404, description = "Mentor not found")
    )
)]
pub async fn book(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<BookRequest>,
) -> AppResult<Created<mentor_booking::Model>> {
    let booking = state
        .services
        .mentorship()
        .book(current_user.id, payload.mentor_id, payload.slot_at)
        .await?;

    Ok(Created(booking))
}

/// List bookings involving the caller, as student or mentor
#[utoipa::path(
    get,
    path = "/api/mentorship/bookings/me",
    tag = "Mentorship",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings, most recent slot first", body = [mentor_booking::Model])
    )
)]
pub async fn my_bookings(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<mentor_booking::Model>>> {
    Ok(Json(
        state
            .services
            .mentorship()
            .my_bookings(current_user.id)
            .await?,
    ))
}

/// Move a booking through its lifecycle (mentor or admin only)
#[utoipa::path(
    put,
    path = "/api/mentorship/bookings/{id}/status",
    tag = "Mentorship",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status updated", body = mentor_booking::Model),
        (status = 400, description = "Invalid transition"),
        (status = 403, description = "Mentor role required")
    )
)]
pub async fn set_status(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusRequest>,
) -> AppResult<Json<mentor_booking::Model>> {
    require_mentor(&current_user)?;

    let booking = state
        .services
        .mentorship()
        .transition(id, &payload.status)
        .await?;

    Ok(Json(booking))
}

/// Record a held session against a confirmed booking (mentor or admin
/// only). Completes the booking.
#[utoipa::path(
    post,
    path = "/api/mentorship/bookings/{id}/session",
    tag = "Mentorship",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = SessionRequest,
    responses(
        (status = 201, description = "Session recorded", body = mentorship_session::Model),
        (status = 400, description = "Booking is not confirmed"),
        (status = 403, description = "Mentor role required")
    )
)]
pub async fn record_session(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(payload): Json<SessionRequest>,
) -> AppResult<Created<mentorship_session::Model>> {
    require_mentor(&current_user)?;

    let session = state
        .services
        .mentorship()
        .record_session(id, payload.held_at, payload.notes)
        .await?;

    Ok(Created(session))
}
