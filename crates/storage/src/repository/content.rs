use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::content::{
    CreateNewsRequest, CreateSponsorRequest, CreateTestimonialRequest, UpsertContentRequest,
    UpsertHeroRequest, UpsertImageRequest, UpsertSectionRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{HeroContent, NewsPost, SectionSetting, SiteContent, SiteImage, Sponsor, Testimonial};

/// Repository for the CMS tables: news, sponsors, testimonials and the
/// key-value shaped site content slots.
pub struct ContentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    // -- news ---------------------------------------------------------

    pub async fn list_news(&self, published_only: bool) -> Result<Vec<NewsPost>> {
        let posts = sqlx::query_as::<_, NewsPost>(
            r#"
            SELECT news_id, title, slug, body, image_url, published, created_at
            FROM news
            WHERE ($1 = FALSE OR published = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(published_only)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn find_news_by_slug(&self, slug: &str) -> Result<NewsPost> {
        let post = sqlx::query_as::<_, NewsPost>(
            r#"
            SELECT news_id, title, slug, body, image_url, published, created_at
            FROM news
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(post)
    }

    pub async fn find_news_by_id(&self, id: Uuid) -> Result<NewsPost> {
        let post = sqlx::query_as::<_, NewsPost>(
            r#"
            SELECT news_id, title, slug, body, image_url, published, created_at
            FROM news
            WHERE news_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(post)
    }

    pub async fn create_news(&self, req: &CreateNewsRequest) -> Result<NewsPost> {
        let post = sqlx::query_as::<_, NewsPost>(
            r#"
            INSERT INTO news (title, slug, body, image_url, published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING news_id, title, slug, body, image_url, published, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.slug)
        .bind(&req.body)
        .bind(&req.image_url)
        .bind(req.published)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Slug already exists"))?;

        Ok(post)
    }

    pub async fn update_news(
        &self,
        id: Uuid,
        title: String,
        body: String,
        image_url: Option<String>,
        published: bool,
    ) -> Result<NewsPost> {
        let post = sqlx::query_as::<_, NewsPost>(
            r#"
            UPDATE news
            SET title = $2, body = $3, image_url = $4, published = $5
            WHERE news_id = $1
            RETURNING news_id, title, slug, body, image_url, published, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .bind(image_url)
        .bind(published)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(post)
    }

    pub async fn delete_news(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news WHERE news_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    // -- sponsors -----------------------------------------------------

    pub async fn list_sponsors(&self) -> Result<Vec<Sponsor>> {
        let sponsors = sqlx::query_as::<_, Sponsor>(
            r#"
            SELECT sponsor_id, name, logo_url, website_url, tier, position
            FROM sponsors
            ORDER BY position ASC, name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sponsors)
    }

    pub async fn create_sponsor(&self, req: &CreateSponsorRequest) -> Result<Sponsor> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            r#"
            INSERT INTO sponsors (name, logo_url, website_url, tier, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING sponsor_id, name, logo_url, website_url, tier, position
            "#,
        )
        .bind(&req.name)
        .bind(&req.logo_url)
        .bind(&req.website_url)
        .bind(&req.tier)
        .bind(req.position)
        .fetch_one(self.pool)
        .await?;

        Ok(sponsor)
    }

    pub async fn delete_sponsor(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sponsors WHERE sponsor_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    // -- testimonials -------------------------------------------------

    pub async fn list_testimonials(&self, published_only: bool) -> Result<Vec<Testimonial>> {
        let testimonials = sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT testimonial_id, author, quote, avatar_url, published, created_at
            FROM testimonials
            WHERE ($1 = FALSE OR published = TRUE)
            ORDER BY created_at DESC
            "#,
        )
        .bind(published_only)
        .fetch_all(self.pool)
        .await?;

        Ok(testimonials)
    }

    pub async fn create_testimonial(&self, req: &CreateTestimonialRequest) -> Result<Testimonial> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (author, quote, avatar_url, published)
            VALUES ($1, $2, $3, $4)
            RETURNING testimonial_id, author, quote, avatar_url, published, created_at
            "#,
        )
        .bind(&req.author)
        .bind(&req.quote)
        .bind(&req.avatar_url)
        .bind(req.published)
        .fetch_one(self.pool)
        .await?;

        Ok(testimonial)
    }

    pub async fn delete_testimonial(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE testimonial_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    // -- site content slots -------------------------------------------

    pub async fn list_content(&self) -> Result<Vec<SiteContent>> {
        let entries = sqlx::query_as::<_, SiteContent>(
            "SELECT content_key, value, updated_at FROM site_content ORDER BY content_key",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn upsert_content(&self, key: &str, req: &UpsertContentRequest) -> Result<SiteContent> {
        let entry = sqlx::query_as::<_, SiteContent>(
            r#"
            INSERT INTO site_content (content_key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (content_key)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING content_key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(&req.value)
        .fetch_one(self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn list_images(&self) -> Result<Vec<SiteImage>> {
        let images = sqlx::query_as::<_, SiteImage>(
            "SELECT image_key, url, alt_text FROM site_images ORDER BY image_key",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(images)
    }

    pub async fn upsert_image(&self, key: &str, req: &UpsertImageRequest) -> Result<SiteImage> {
        let image = sqlx::query_as::<_, SiteImage>(
            r#"
            INSERT INTO site_images (image_key, url, alt_text)
            VALUES ($1, $2, $3)
            ON CONFLICT (image_key)
            DO UPDATE SET url = EXCLUDED.url, alt_text = EXCLUDED.alt_text
            RETURNING image_key, url, alt_text
            "#,
        )
        .bind(key)
        .bind(&req.url)
        .bind(&req.alt_text)
        .fetch_one(self.pool)
        .await?;

        Ok(image)
    }

    pub async fn list_sections(&self) -> Result<Vec<SectionSetting>> {
        let sections = sqlx::query_as::<_, SectionSetting>(
            "SELECT section, visible, position FROM section_settings ORDER BY position ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sections)
    }

    pub async fn upsert_section(
        &self,
        section: &str,
        req: &UpsertSectionRequest,
    ) -> Result<SectionSetting> {
        let setting = sqlx::query_as::<_, SectionSetting>(
            r#"
            INSERT INTO section_settings (section, visible, position)
            VALUES ($1, $2, $3)
            ON CONFLICT (section)
            DO UPDATE SET visible = EXCLUDED.visible, position = EXCLUDED.position
            RETURNING section, visible, position
            "#,
        )
        .bind(section)
        .bind(req.visible)
        .bind(req.position)
        .fetch_one(self.pool)
        .await?;

        Ok(setting)
    }

    pub async fn get_hero(&self) -> Result<Option<HeroContent>> {
        let hero = sqlx::query_as::<_, HeroContent>(
            r#"
            SELECT hero_id, heading, subheading, image_url, cta_label, cta_url, updated_at
            FROM hero_content
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(hero)
    }

    /// Replace the hero block. Existing rows are cleared first so the
    /// table keeps a single row by convention.
    pub async fn upsert_hero(&self, req: &UpsertHeroRequest) -> Result<HeroContent> {
        sqlx::query("DELETE FROM hero_content")
            .execute(self.pool)
            .await?;

        let hero = sqlx::query_as::<_, HeroContent>(
            r#"
            INSERT INTO hero_content (heading, subheading, image_url, cta_label, cta_url, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING hero_id, heading, subheading, image_url, cta_label, cta_url, updated_at
            "#,
        )
        .bind(&req.heading)
        .bind(&req.subheading)
        .bind(&req.image_url)
        .bind(&req.cta_label)
        .bind(&req.cta_url)
        .fetch_one(self.pool)
        .await?;

        Ok(hero)
    }
}
