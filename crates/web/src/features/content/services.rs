use sqlx::PgPool;
use storage::{
    dto::content::{UpsertContentRequest, UpsertHeroRequest, UpsertImageRequest, UpsertSectionRequest},
    error::Result,
    models::{HeroContent, SectionSetting, SiteContent, SiteImage},
    repository::content::ContentRepository,
};

pub async fn list_content(pool: &PgPool) -> Result<Vec<SiteContent>> {
    ContentRepository::new(pool).list_content().await
}

pub async fn upsert_content(
    pool: &PgPool,
    key: &str,
    req: &UpsertContentRequest,
) -> Result<SiteContent> {
    ContentRepository::new(pool).upsert_content(key, req).await
}

pub async fn list_images(pool: &PgPool) -> Result<Vec<SiteImage>> {
    ContentRepository::new(pool).list_images().await
}

pub async fn upsert_image(pool: &PgPool, key: &str, req: &UpsertImageRequest) -> Result<SiteImage> {
    ContentRepository::new(pool).upsert_image(key, req).await
}

pub async fn list_sections(pool: &PgPool) -> Result<Vec<SectionSetting>> {
    ContentRepository::new(pool).list_sections().await
}

pub async fn upsert_section(
    pool: &PgPool,
    section: &str,
    req: &UpsertSectionRequest,
) -> Result<SectionSetting> {
    ContentRepository::new(pool).upsert_section(section, req).await
}

pub async fn get_hero(pool: &PgPool) -> Result<Option<HeroContent>> {
    ContentRepository::new(pool).get_hero().await
}

pub async fn upsert_hero(pool: &PgPool, req: &UpsertHeroRequest) -> Result<HeroContent> {
    ContentRepository::new(pool).upsert_hero(req).await
}
