use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{ContactMessage, MessageReply};

/// Public contact form payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MoveMessageRequest {
    #[validate(custom(function = "validate_folder"))]
    pub folder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplyRequest {
    #[validate(length(min = 1, max = 10000))]
    pub body: String,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MessageFilter {
    pub folder: Option<String>,
    #[serde(default = "crate::dto::common::default_page")]
    pub page: u32,
    #[serde(default = "crate::dto::common::default_page_size")]
    pub page_size: u32,
}

impl MessageFilter {
    pub fn pagination(&self) -> Result<(u32, u32), String> {
        crate::dto::common::bounded_pagination(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message_id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub folder: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
}

impl From<ContactMessage> for MessageResponse {
    fn from(m: ContactMessage) -> Self {
        Self {
            message_id: m.message_id,
            name: m.name,
            email: m.email,
            subject: m.subject,
            body: m.body,
            folder: m.folder,
            read: m.read,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyResponse {
    pub reply_id: Uuid,
    pub message_id: Uuid,
    pub body: String,
    pub sent_at: NaiveDateTime,
}

impl From<MessageReply> for ReplyResponse {
    fn from(r: MessageReply) -> Self {
        Self {
            reply_id: r.reply_id,
            message_id: r.message_id,
            body: r.body,
            sent_at: r.sent_at,
        }
    }
}

fn validate_folder(folder: &str) -> Result<(), validator::ValidationError> {
    const VALID_FOLDERS: &[&str] = &["inbox", "archived", "trash"];

    if VALID_FOLDERS.contains(&folder) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_folder"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_moves_are_limited_to_known_folders() {
        for folder in ["inbox", "archived", "trash"] {
            let req = MoveMessageRequest {
                folder: folder.to_string(),
            };
            assert!(req.validate().is_ok());
        }

        let req = MoveMessageRequest {
            folder: "spam".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
