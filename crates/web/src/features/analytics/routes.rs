use axum::{Router, routing::get};

use super::handlers::{applications_per_event, dashboard};
use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/events", get(applications_per_event))
}
