use sqlx::PgPool;
use storage::{
    dto::content::{CreateNewsRequest, CreateSponsorRequest, CreateTestimonialRequest, UpdateNewsRequest},
    error::Result,
    models::{NewsPost, Sponsor, Testimonial},
    repository::content::ContentRepository,
};
use uuid::Uuid;

pub async fn list_news(pool: &PgPool, published_only: bool) -> Result<Vec<NewsPost>> {
    ContentRepository::new(pool).list_news(published_only).await
}

pub async fn get_news_by_slug(pool: &PgPool, slug: &str) -> Result<NewsPost> {
    ContentRepository::new(pool).find_news_by_slug(slug).await
}

pub async fn create_news(pool: &PgPool, req: &CreateNewsRequest) -> Result<NewsPost> {
    ContentRepository::new(pool).create_news(req).await
}

pub async fn update_news(pool: &PgPool, id: Uuid, req: &UpdateNewsRequest) -> Result<NewsPost> {
    let repo = ContentRepository::new(pool);

    // Missing fields fall back to the stored row.
    let existing = repo.find_news_by_id(id).await?;

    repo.update_news(
        id,
        req.title.clone().unwrap_or(existing.title),
        req.body.clone().unwrap_or(existing.body),
        req.image_url.clone().or(existing.image_url),
        req.published.unwrap_or(existing.published),
    )
    .await
}

pub async fn delete_news(pool: &PgPool, id: Uuid) -> Result<()> {
    ContentRepository::new(pool).delete_news(id).await
}

pub async fn list_sponsors(pool: &PgPool) -> Result<Vec<Sponsor>> {
    ContentRepository::new(pool).list_sponsors().await
}

pub async fn create_sponsor(pool: &PgPool, req: &CreateSponsorRequest) -> Result<Sponsor> {
    ContentRepository::new(pool).create_sponsor(req).await
}

pub async fn delete_sponsor(pool: &PgPool, id: Uuid) -> Result<()> {
    ContentRepository::new(pool).delete_sponsor(id).await
}

pub async fn list_testimonials(pool: &PgPool, published_only: bool) -> Result<Vec<Testimonial>> {
    ContentRepository::new(pool)
        .list_testimonials(published_only)
        .await
}

pub async fn create_testimonial(
    pool: &PgPool,
    req: &CreateTestimonialRequest,
) -> Result<Testimonial> {
    ContentRepository::new(pool).create_testimonial(req).await
}

pub async fn delete_testimonial(pool: &PgPool, id: Uuid) -> Result<()> {
    ContentRepository::new(pool).delete_testimonial(id).await
}
