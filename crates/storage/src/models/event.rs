use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: String,
    pub status: String,
    /// Denormalized registration counter, bumped on each successful
    /// application and never decremented.
    pub participants: i32,
    /// At most one event carries the flag; kept by convention, not by
    /// a database constraint.
    pub active_event: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Published,
    Draft,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "published" => Some(Self::Published),
            "draft" => Some(Self::Draft),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}
