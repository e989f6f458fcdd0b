use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    get_hero, list_content, list_images, list_sections, upsert_content, upsert_hero,
    upsert_image, upsert_section,
};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/content", get(list_content))
        .route("/images", get(list_images))
        .route("/sections", get(list_sections))
        .route("/hero", get(get_hero))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/content/:key", put(upsert_content))
        .route("/images/:key", put(upsert_image))
        .route("/sections/:section", put(upsert_section))
        .route("/hero", put(upsert_hero))
}
