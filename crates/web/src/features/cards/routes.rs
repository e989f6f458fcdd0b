use axum::{Router, routing::get};

use super::handlers::get_participant_card;
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/:id/card", get(get_participant_card))
}
