use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::repository::analytics::{DashboardCounts, EventApplicationCount};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/analytics/dashboard",
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Aggregate dashboard counts", body = DashboardCounts),
        (status = 401, description = "Unauthorized")
    ),
    tag = "analytics"
)]
pub async fn dashboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let counts = services::dashboard_counts(state.db.pool()).await?;

    Ok(Json(counts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/analytics/events",
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Applications per event", body = Vec<EventApplicationCount>)
    ),
    tag = "analytics"
)]
pub async fn applications_per_event(State(state): State<AppState>) -> Result<Response, WebError> {
    let rows = services::applications_per_event(state.db.pool()).await?;

    Ok(Json(rows).into_response())
}
