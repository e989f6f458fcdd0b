use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::application::ParticipantCardResponse;
use uuid::Uuid;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/applications/{id}/card",
    params(("id" = Uuid, Path, description = "Application id")),
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "Printable card material", body = ParticipantCardResponse),
        (status = 404, description = "Application not found")
    ),
    tag = "cards"
)]
pub async fn get_participant_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let card = services::participant_card(state.db.pool(), id).await?;

    Ok(Json(card).into_response())
}
