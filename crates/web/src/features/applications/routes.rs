use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use super::handlers::{
    active_application, delete_application, get_application, list_applications,
    submit_application, update_application_status,
};
use crate::state::AppState;

/// Public registration surface.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_application))
        .route("/active", get(active_application))
}

/// Back-office surface; the admin session check is layered on by the
/// caller.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_applications))
        .route("/:id", get(get_application))
        .route("/:id/status", patch(update_application_status))
        .route("/:id", delete(delete_application))
}
