//! Feature-flag handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::middleware::{require_admin, CurrentUser};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::entities::feature_flag;

/// Flag toggle request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleRequest {
    pub is_enabled: bool,
}

/// Public feature routes (the frontend reads flags before login)
pub fn feature_routes() -> Router<AppState> {
    Router::new().route("/", get(list_flags))
}

/// Admin-only feature routes
pub fn feature_admin_routes() -> Router<AppState> {
    Router::new().route("/:key", put(toggle_flag))
}

/// List all feature flags
#[utoipa::path(
    get,
    path = "/api/features",
    tag = "Features",
    responses(
        (status = 200, description = "All flags", body = [feature_flag::Model])
    )
)]
pub async fn list_flags(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<feature_flag::Model>>> {
    Ok(Json(state.services.features().list_flags().await?))
}

/// Enable or disable a feature flag (admin only)
#[utoipa::path(
    put,
    path = "/api/features/{key}",
    tag = "Features",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Feature key")),
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Flag updated", body = feature_flag::Model),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Unknown flag")
    )
)]
pub async fn toggle_flag(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(key): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> AppResult<Json<feature_flag::Model>> {
    require_admin(&current_user)?;

    let flag = state
        .services
        .features()
        .set_enabled(&key, payload.is_enabled)
        .await?;

    Ok(Json(flag))
}
