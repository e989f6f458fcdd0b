use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::handlers::{
    activate_event, create_event, delete_event, get_active_event, get_event, list_all_events,
    list_events, update_event,
};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/active", get(get_active_event))
        .route("/:slug", get(get_event))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all_events))
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route("/:id/activate", post(activate_event))
        .route("/:id", delete(delete_event))
}
