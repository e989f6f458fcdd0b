use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Application, ApplicationStatus};

/// Public application form payload. Everything here is snapshotted onto
/// the record as submitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateApplicationRequest {
    pub event_id: Uuid,

    pub user_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Full name must be between 1 and 255 characters"
    ))]
    pub full_name: String,

    #[validate(length(
        min = 5,
        max = 32,
        message = "National id must be between 5 and 32 characters"
    ))]
    pub national_id: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(
        min = 7,
        max = 32,
        message = "Phone must be between 7 and 32 characters"
    ))]
    pub phone: String,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 32))]
    pub gender: String,

    #[validate(length(min = 1, max = 255))]
    pub city: String,

    #[validate(length(max = 255))]
    pub club: Option<String>,

    #[validate(custom(function = "validate_category"))]
    pub category: String,

    #[validate(length(min = 1, max = 255))]
    pub emergency_contact_name: String,

    #[validate(length(min = 7, max = 32))]
    pub emergency_contact_phone: String,

    #[validate(url(message = "Receipt must be a URL"))]
    pub receipt_url: Option<String>,
}

/// Admin decision payload: only the two terminal outcomes are
/// expressible, there is no way back to pending through the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusDecision {
    Approved,
    Rejected,
}

impl StatusDecision {
    pub fn as_status(self) -> ApplicationStatus {
        match self {
            Self::Approved => ApplicationStatus::Approved,
            Self::Rejected => ApplicationStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: StatusDecision,
}

/// Admin list query: optional narrowing plus pagination, flattened into
/// one struct so it deserializes from a single query string.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ApplicationFilter {
    pub status: Option<String>,
    pub event_id: Option<Uuid>,
    #[serde(default = "crate::dto::common::default_page")]
    pub page: u32,
    #[serde(default = "crate::dto::common::default_page_size")]
    pub page_size: u32,
}

impl ApplicationFilter {
    pub fn pagination(&self) -> Result<(u32, u32), String> {
        crate::dto::common::bounded_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ActiveApplicationQuery {
    pub user_id: Uuid,
    pub event_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActiveApplicationResponse {
    pub has_active_application: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponse {
    pub application_id: Uuid,
    pub event_id: Uuid,
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub city: String,
    pub club: Option<String>,
    pub category: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub receipt_url: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        Self {
            application_id: a.application_id,
            event_id: a.event_id,
            user_id: a.user_id,
            full_name: a.full_name,
            national_id: a.national_id,
            email: a.email,
            phone: a.phone,
            birth_date: a.birth_date,
            gender: a.gender,
            city: a.city,
            club: a.club,
            category: a.category,
            emergency_contact_name: a.emergency_contact_name,
            emergency_contact_phone: a.emergency_contact_phone,
            receipt_url: a.receipt_url,
            status: a.status,
            created_at: a.created_at,
        }
    }
}

/// Printable card material for an application.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantCardResponse {
    pub application_id: Uuid,
    pub full_name: String,
    pub category: String,
    pub bib_number: String,
    pub qr_payload: String,
    pub qr_image_url: String,
}

fn validate_category(category: &str) -> Result<(), validator::ValidationError> {
    const VALID_CATEGORIES: &[&str] = &["long", "short"];

    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_category"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_request() -> CreateApplicationRequest {
        CreateApplicationRequest {
            event_id: Uuid::new_v4(),
            user_id: None,
            full_name: "Ada Lovelace".to_string(),
            national_id: "12345678901".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+905551112233".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            gender: "female".to_string(),
            city: "Izmir".to_string(),
            club: None,
            category: "long".to_string(),
            emergency_contact_name: "Charles Babbage".to_string(),
            emergency_contact_phone: "+905554445566".to_string(),
            receipt_url: None,
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_category() {
        let mut req = valid_request();
        req.category = "marathon".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn decision_maps_to_terminal_status() {
        assert_eq!(
            StatusDecision::Approved.as_status(),
            ApplicationStatus::Approved
        );
        assert_eq!(
            StatusDecision::Rejected.as_status(),
            ApplicationStatus::Rejected
        );
    }
}
