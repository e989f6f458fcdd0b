use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::application::{
    ActiveApplicationQuery, ActiveApplicationResponse, ApplicationFilter, ApplicationResponse,
    CreateApplicationRequest, UpdateStatusRequest,
};
use storage::dto::common::PaginatedResponse;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = CreateApplicationRequest,
    responses(
        (status = 201, description = "Application submitted", body = ApplicationResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "applications"
)]
pub async fn submit_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let application = services::submit_application(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(application))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/applications/active",
    params(ActiveApplicationQuery),
    responses(
        (status = 200, description = "Whether a non-rejected application exists", body = ActiveApplicationResponse)
    ),
    tag = "applications"
)]
pub async fn active_application(
    State(state): State<AppState>,
    Query(query): Query<ActiveApplicationQuery>,
) -> Result<Response, WebError> {
    let has_active =
        services::has_active_application(state.db.pool(), query.user_id, query.event_id).await?;

    Ok(Json(ActiveApplicationResponse {
        has_active_application: has_active,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/applications",
    params(ApplicationFilter),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Paginated applications"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "applications"
)]
pub async fn list_applications(
    State(state): State<AppState>,
    Query(filter): Query<ApplicationFilter>,
) -> Result<Response, WebError> {
    let (limit, offset) = filter.pagination().map_err(WebError::BadRequest)?;

    let (applications, total) =
        services::list_applications(state.db.pool(), &filter, limit, offset).await?;

    let data: Vec<ApplicationResponse> = applications
        .into_iter()
        .map(ApplicationResponse::from)
        .collect();

    Ok(Json(PaginatedResponse::new(data, filter.page, filter.page_size, total)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/applications/{id}",
    params(("id" = Uuid, Path, description = "Application id")),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Application found", body = ApplicationResponse),
        (status = 404, description = "Application not found")
    ),
    tag = "applications"
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let application = services::get_application(state.db.pool(), id).await?;

    Ok(Json(ApplicationResponse::from(application)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/admin/applications/{id}/status",
    params(("id" = Uuid, Path, description = "Application id")),
    request_body = UpdateStatusRequest,
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Status updated; notification attempted", body = ApplicationResponse),
        (status = 404, description = "Application not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "applications"
)]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Response, WebError> {
    let application = services::update_application_status(
        state.db.pool(),
        state.mailer.as_ref(),
        id,
        req.status,
    )
    .await?;

    Ok(Json(ApplicationResponse::from(application)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/applications/{id}",
    params(("id" = Uuid, Path, description = "Application id")),
    security(("admin_session" = [])),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 404, description = "Application not found")
    ),
    tag = "applications"
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_application(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
