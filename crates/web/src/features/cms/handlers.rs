use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::content::{
    CreateNewsRequest, CreateSponsorRequest, CreateTestimonialRequest, UpdateNewsRequest,
};
use storage::models::{NewsPost, Sponsor, Testimonial};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses((status = 200, description = "Published news posts", body = Vec<NewsPost>)),
    tag = "cms"
)]
pub async fn list_news(State(state): State<AppState>) -> Result<Response, WebError> {
    let posts = services::list_news(state.db.pool(), true).await?;
    Ok(Json(posts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "News post found", body = NewsPost),
        (status = 404, description = "News post not found")
    ),
    tag = "cms"
)]
pub async fn get_news(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let post = services::get_news_by_slug(state.db.pool(), &slug).await?;
    Ok(Json(post).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/news",
    security(("admin_session" = [])),
    responses((status = 200, description = "All news posts including drafts", body = Vec<NewsPost>)),
    tag = "cms"
)]
pub async fn list_all_news(State(state): State<AppState>) -> Result<Response, WebError> {
    let posts = services::list_news(state.db.pool(), false).await?;
    Ok(Json(posts).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/news",
    request_body = CreateNewsRequest,
    security(("admin_session" = [])),
    responses(
        (status = 201, description = "News post created", body = NewsPost),
        (status = 409, description = "Slug already exists")
    ),
    tag = "cms"
)]
pub async fn create_news(
    State(state): State<AppState>,
    Json(req): Json<CreateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let post = services::create_news(state.db.pool(), &req).await?;
    Ok((StatusCode::CREATED, Json(post)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/news/{id}",
    params(("id" = Uuid, Path, description = "News id")),
    request_body = UpdateNewsRequest,
    security(("admin_session" = [])),
    responses(
        (status = 200, description = "News post updated", body = NewsPost),
        (status = 404, description = "News post not found")
    ),
    tag = "cms"
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let post = services::update_news(state.db.pool(), id, &req).await?;
    Ok(Json(post).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/news/{id}",
    params(("id" = Uuid, Path, description = "News id")),
    security(("admin_session" = [])),
    responses((status = 204, description = "News post deleted")),
    tag = "cms"
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_news(state.db.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/sponsors",
    responses((status = 200, description = "Sponsors in display order", body = Vec<Sponsor>)),
    tag = "cms"
)]
pub async fn list_sponsors(State(state): State<AppState>) -> Result<Response, WebError> {
    let sponsors = services::list_sponsors(state.db.pool()).await?;
    Ok(Json(sponsors).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/sponsors",
    request_body = CreateSponsorRequest,
    security(("admin_session" = [])),
    responses((status = 201, description = "Sponsor created", body = Sponsor)),
    tag = "cms"
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    Json(req): Json<CreateSponsorRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let sponsor = services::create_sponsor(state.db.pool(), &req).await?;
    Ok((StatusCode::CREATED, Json(sponsor)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/sponsors/{id}",
    params(("id" = Uuid, Path, description = "Sponsor id")),
    security(("admin_session" = [])),
    responses((status = 204, description = "Sponsor deleted")),
    tag = "cms"
)]
pub async fn delete_sponsor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_sponsor(state.db.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses((status = 200, description = "Published testimonials", body = Vec<Testimonial>)),
    tag = "cms"
)]
pub async fn list_testimonials(State(state): State<AppState>) -> Result<Response, WebError> {
    let testimonials = services::list_testimonials(state.db.pool(), true).await?;
    Ok(Json(testimonials).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    request_body = CreateTestimonialRequest,
    security(("admin_session" = [])),
    responses((status = 201, description = "Testimonial created", body = Testimonial)),
    tag = "cms"
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(req): Json<CreateTestimonialRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let testimonial = services::create_testimonial(state.db.pool(), &req).await?;
    Ok((StatusCode::CREATED, Json(testimonial)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    security(("admin_session" = [])),
    responses((status = 204, description = "Testimonial deleted")),
    tag = "cms"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_testimonial(state.db.pool(), id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
