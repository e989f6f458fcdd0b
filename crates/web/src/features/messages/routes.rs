use axum::{
    Router,
    routing::{delete, get, post},
};

use super::handlers::{
    delete_message, get_message, list_messages, mark_read, move_message, reply_to_message,
    submit_message,
};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", post(submit_message))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_messages))
        .route("/:id", get(get_message))
        .route("/:id/read", post(mark_read))
        .route("/:id/move", post(move_message))
        .route("/:id/reply", post(reply_to_message))
        .route("/:id", delete(delete_message))
}
