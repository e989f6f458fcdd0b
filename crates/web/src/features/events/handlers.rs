use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::event::{CreateEventRequest, EventResponse, UpdateEventRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "Published events, soonest first", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_published_events(state.db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/active",
    responses(
        (status = 200, description = "The featured event", body = EventResponse),
        (status = 404, description = "No event is flagged active")
    ),
    tag = "events"
)]
pub async fn get_active_event(State(state): State<AppState>) -> Result<Response, WebError> {
    let event = services::get_active_event(state.db.pool())
        .await?
        .ok_or(WebError::Storage(storage::error::StorageError::NotFound))?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    params(("slug" = String, Path, description = "Event slug")),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event_by_slug(state.db.pool(), &slug).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "All events including drafts", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_all_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_all_events(state.db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = CreateEventRequest,
    security(("admin_session" = [])),
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    request_body = UpdateEventRequest,
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(state.db.pool(), id, &req).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/events/{id}/activate",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Event flagged as the featured one", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn activate_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::activate_event(state.db.pool(), id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    params(("id" = Uuid, Path, description = "Event id")),
    security(("admin_session" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
