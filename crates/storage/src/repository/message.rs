use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::message::CreateMessageRequest;
use crate::error::{Result, StorageError};
use crate::models::{ContactMessage, MessageFolder, MessageReply};

/// Repository for contact message and reply database operations
pub struct MessageRepository<'a> {
    pool: &'a PgPool,
}

const COLUMNS: &str = "message_id, name, email, subject, body, folder, read, created_at";

impl<'a> MessageRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        folder: Option<MessageFolder>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM contact_messages
            WHERE ($1::text IS NULL OR folder = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(folder.map(MessageFolder::as_str))
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn count(&self, folder: Option<MessageFolder>) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM contact_messages
            WHERE ($1::text IS NULL OR folder = $1)
            "#,
        )
        .bind(folder.map(MessageFolder::as_str))
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM contact_messages
            WHERE message_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(message)
    }

    pub async fn create(&self, req: &CreateMessageRequest) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            INSERT INTO contact_messages (name, email, subject, body)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.subject)
        .bind(&req.body)
        .fetch_one(self.pool)
        .await?;

        Ok(message)
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            UPDATE contact_messages
            SET read = TRUE
            WHERE message_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(message)
    }

    pub async fn move_to_folder(&self, id: Uuid, folder: MessageFolder) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            r#"
            UPDATE contact_messages
            SET folder = $2
            WHERE message_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(folder.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(message)
    }

    pub async fn add_reply(&self, message_id: Uuid, body: &str) -> Result<MessageReply> {
        let reply = sqlx::query_as::<_, MessageReply>(
            r#"
            INSERT INTO message_replies (message_id, body)
            VALUES ($1, $2)
            RETURNING reply_id, message_id, body, sent_at
            "#,
        )
        .bind(message_id)
        .bind(body)
        .fetch_one(self.pool)
        .await?;

        Ok(reply)
    }

    pub async fn list_replies(&self, message_id: Uuid) -> Result<Vec<MessageReply>> {
        let replies = sqlx::query_as::<_, MessageReply>(
            r#"
            SELECT reply_id, message_id, body, sent_at
            FROM message_replies
            WHERE message_id = $1
            ORDER BY sent_at ASC
            "#,
        )
        .bind(message_id)
        .fetch_all(self.pool)
        .await?;

        Ok(replies)
    }

    /// Hard delete; replies go with the message via ON DELETE CASCADE.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE message_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
