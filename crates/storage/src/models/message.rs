use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ContactMessage {
    pub message_id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub folder: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MessageReply {
    pub reply_id: Uuid,
    pub message_id: Uuid,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

/// Inbox workflow folders. Moving a message only rewrites this field;
/// nothing is deleted until an explicit admin delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageFolder {
    Inbox,
    Archived,
    Trash,
}

impl MessageFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Archived => "archived",
            Self::Trash => "trash",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "inbox" => Some(Self::Inbox),
            "archived" => Some(Self::Archived),
            "trash" => Some(Self::Trash),
            _ => None,
        }
    }
}
