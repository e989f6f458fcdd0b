use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or replacing a news post
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewsRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 255))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub body: String,

    #[validate(url)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub body: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub published: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSponsorRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(url)]
    pub logo_url: String,

    #[validate(url)]
    pub website_url: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub tier: String,

    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 255))]
    pub author: String,

    #[validate(length(min = 1, max = 2000))]
    pub quote: String,

    #[validate(url)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub published: bool,
}

/// Upsert payload for one editable text slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertContentRequest {
    #[validate(length(min = 1))]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertImageRequest {
    #[validate(url)]
    pub url: String,

    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertSectionRequest {
    pub visible: bool,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertHeroRequest {
    #[validate(length(min = 1, max = 255))]
    pub heading: String,

    #[validate(length(max = 500))]
    pub subheading: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    #[validate(length(max = 64))]
    pub cta_label: Option<String>,

    #[validate(url)]
    pub cta_url: Option<String>,
}
