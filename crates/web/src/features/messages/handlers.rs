use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::common::PaginatedResponse;
use storage::dto::message::{
    CreateMessageRequest, MessageFilter, MessageResponse, MoveMessageRequest, ReplyRequest,
    ReplyResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message received", body = MessageResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "messages"
)]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let message = services::submit_message(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    params(MessageFilter),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Paginated messages")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(filter): Query<MessageFilter>,
) -> Result<Response, WebError> {
    let (limit, offset) = filter.pagination().map_err(WebError::BadRequest)?;

    let (messages, total) =
        services::list_messages(state.db.pool(), filter.folder.as_deref(), limit, offset).await?;

    let data: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();

    Ok(Json(PaginatedResponse::new(data, filter.page, filter.page_size, total)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/messages/{id}",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Message with its replies"),
        (status = 404, description = "Message not found")
    ),
    tag = "messages"
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let (message, replies) = services::get_message(state.db.pool(), id).await?;

    let replies: Vec<ReplyResponse> = replies.into_iter().map(ReplyResponse::from).collect();

    Ok(Json(json!({
        "message": MessageResponse::from(message),
        "replies": replies,
    }))
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/messages/{id}/read",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Message marked read", body = MessageResponse),
        (status = 404, description = "Message not found")
    ),
    tag = "messages"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let message = services::mark_read(state.db.pool(), id).await?;

    Ok(Json(MessageResponse::from(message)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/messages/{id}/move",
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = MoveMessageRequest,
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Message moved", body = MessageResponse),
        (status = 404, description = "Message not found")
    ),
    tag = "messages"
)]
pub async fn move_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveMessageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let message = services::move_message(state.db.pool(), id, &req.folder).await?;

    Ok(Json(MessageResponse::from(message)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/messages/{id}/reply",
    params(("id" = Uuid, Path, description = "Message id")),
    request_body = ReplyRequest,
    security(("admin_session" = [])),
    responses(
        (status = 201, description = "Reply stored; email attempted", body = ReplyResponse),
        (status = 404, description = "Message not found")
    ),
    tag = "messages"
)]
pub async fn reply_to_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplyRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let reply =
        services::reply_to_message(state.db.pool(), state.mailer.as_ref(), id, &req.body).await?;

    Ok((StatusCode::CREATED, Json(ReplyResponse::from(reply))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(("id" = Uuid, Path, description = "Message id")),
    security(("admin_session" = [])),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 404, description = "Message not found")
    ),
    tag = "messages"
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_message(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
