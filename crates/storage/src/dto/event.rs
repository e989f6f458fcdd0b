use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Slug must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    pub description: Option<String>,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub location: String,

    #[validate(custom(function = "validate_status"))]
    #[serde(default = "default_status")]
    pub status: String,
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: String,
    pub status: String,
    pub participants: i32,
    pub active_event: bool,
    pub created_at: NaiveDateTime,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            event_id: e.event_id,
            title: e.title,
            slug: e.slug,
            description: e.description,
            date: e.date,
            location: e.location,
            status: e.status,
            participants: e.participants,
            active_event: e.active_event,
            created_at: e.created_at,
        }
    }
}

// Validation helpers
fn default_status() -> String {
    "draft".to_string()
}

fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    let is_valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["published", "draft", "cancelled"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest {
            title: "Gran Fondo 2026".to_string(),
            slug: "gran-fondo-2026".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2026, 5, 17).unwrap(),
            location: "Izmir".to_string(),
            status: "draft".to_string(),
        }
    }

    #[test]
    fn accepts_valid_event() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_bad_slug() {
        let mut req = valid_request();
        req.slug = "Gran Fondo".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_unknown_status() {
        let mut req = valid_request();
        req.status = "live".to_string();
        assert!(req.validate().is_err());
    }
}
