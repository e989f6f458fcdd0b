use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_news, create_sponsor, create_testimonial, delete_news, delete_sponsor,
    delete_testimonial, get_news, list_all_news, list_news, list_sponsors, list_testimonials,
    update_news,
};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_news))
        .route("/news/:slug", get(get_news))
        .route("/sponsors", get(list_sponsors))
        .route("/testimonials", get(list_testimonials))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(list_all_news))
        .route("/news", post(create_news))
        .route("/news/:id", put(update_news))
        .route("/news/:id", delete(delete_news))
        .route("/sponsors", post(create_sponsor))
        .route("/sponsors/:id", delete(delete_sponsor))
        .route("/testimonials", post(create_testimonial))
        .route("/testimonials/:id", delete(delete_testimonial))
}
