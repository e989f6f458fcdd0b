use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::content::{
    UpsertContentRequest, UpsertHeroRequest, UpsertImageRequest, UpsertSectionRequest,
};
use storage::models::{HeroContent, SectionSetting, SiteContent, SiteImage};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/content",
    responses((status = 200, description = "All editable text slots", body = Vec<SiteContent>)),
    tag = "content"
)]
pub async fn list_content(State(state): State<AppState>) -> Result<Response, WebError> {
    let entries = services::list_content(state.db.pool()).await?;
    Ok(Json(entries).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/content/{key}",
    params(("key" = String, Path, description = "Content slot key")),
    request_body = UpsertContentRequest,
    security(("admin_session" = [])),
    responses((status = 200, description = "Slot created or replaced", body = SiteContent)),
    tag = "content"
)]
pub async fn upsert_content(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<UpsertContentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let entry = services::upsert_content(state.db.pool(), &key, &req).await?;
    Ok(Json(entry).into_response())
}

#[utoipa::path(
    get,
    path = "/api/images",
    responses((status = 200, description = "All image slots", body = Vec<SiteImage>)),
    tag = "content"
)]
pub async fn list_images(State(state): State<AppState>) -> Result<Response, WebError> {
    let images = services::list_images(state.db.pool()).await?;
    Ok(Json(images).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/images/{key}",
    params(("key" = String, Path, description = "Image slot key")),
    request_body = UpsertImageRequest,
    security(("admin_session" = [])),
    responses((status = 200, description = "Image slot created or replaced", body = SiteImage)),
    tag = "content"
)]
pub async fn upsert_image(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<UpsertImageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let image = services::upsert_image(state.db.pool(), &key, &req).await?;
    Ok(Json(image).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sections",
    responses((status = 200, description = "Section visibility and ordering", body = Vec<SectionSetting>)),
    tag = "content"
)]
pub async fn list_sections(State(state): State<AppState>) -> Result<Response, WebError> {
    let sections = services::list_sections(state.db.pool()).await?;
    Ok(Json(sections).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/sections/{section}",
    params(("section" = String, Path, description = "Section name")),
    request_body = UpsertSectionRequest,
    security(("admin_session" = [])),
    responses((status = 200, description = "Section setting created or replaced", body = SectionSetting)),
    tag = "content"
)]
pub async fn upsert_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(req): Json<UpsertSectionRequest>,
) -> Result<Response, WebError> {
    let setting = services::upsert_section(state.db.pool(), &section, &req).await?;
    Ok(Json(setting).into_response())
}

#[utoipa::path(
    get,
    path = "/api/hero",
    responses(
        (status = 200, description = "Landing hero block", body = HeroContent),
        (status = 404, description = "No hero configured")
    ),
    tag = "content"
)]
pub async fn get_hero(State(state): State<AppState>) -> Result<Response, WebError> {
    let hero = services::get_hero(state.db.pool())
        .await?
        .ok_or(WebError::Storage(storage::error::StorageError::NotFound))?;
    Ok(Json(hero).into_response())
}

#[utoipa::path(
    put,
    path = "/api/admin/hero",
    request_body = UpsertHeroRequest,
    security(("admin_session" = [])),
    responses((status = 200, description = "Hero block replaced", body = HeroContent)),
    tag = "content"
)]
pub async fn upsert_hero(
    State(state): State<AppState>,
    Json(req): Json<UpsertHeroRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    let hero = services::upsert_hero(state.db.pool(), &req).await?;
    Ok(Json(hero).into_response())
}
