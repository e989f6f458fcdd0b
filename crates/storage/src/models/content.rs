use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NewsPost {
    pub news_id: Uuid,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Sponsor {
    pub sponsor_id: Uuid,
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub tier: String,
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub testimonial_id: Uuid,
    pub author: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub published: bool,
    pub created_at: NaiveDateTime,
}

/// Free-form editable text keyed by a well-known slot name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SiteContent {
    pub content_key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SiteImage {
    pub image_key: String,
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SectionSetting {
    pub section: String,
    pub visible: bool,
    pub position: i32,
}

/// Single-row landing hero block; the row is upserted, never multiplied.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HeroContent {
    pub hero_id: Uuid,
    pub heading: String,
    pub subheading: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub updated_at: NaiveDateTime,
}
