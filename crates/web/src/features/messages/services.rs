use sqlx::PgPool;
use storage::{
    dto::message::CreateMessageRequest,
    error::{Result, StorageError},
    models::{ContactMessage, MessageFolder, MessageReply},
    repository::message::MessageRepository,
};
use uuid::Uuid;

use crate::mailer::Mailer;

pub async fn submit_message(pool: &PgPool, req: &CreateMessageRequest) -> Result<ContactMessage> {
    MessageRepository::new(pool).create(req).await
}

pub async fn list_messages(
    pool: &PgPool,
    folder: Option<&str>,
    limit: u32,
    offset: u32,
) -> Result<(Vec<ContactMessage>, i64)> {
    let folder = parse_folder(folder)?;

    let repo = MessageRepository::new(pool);
    let messages = repo.list(folder, limit, offset).await?;
    let total = repo.count(folder).await?;

    Ok((messages, total))
}

pub async fn get_message(pool: &PgPool, id: Uuid) -> Result<(ContactMessage, Vec<MessageReply>)> {
    let repo = MessageRepository::new(pool);
    let message = repo.find_by_id(id).await?;
    let replies = repo.list_replies(id).await?;

    Ok((message, replies))
}

pub async fn mark_read(pool: &PgPool, id: Uuid) -> Result<ContactMessage> {
    MessageRepository::new(pool).mark_read(id).await
}

pub async fn move_message(pool: &PgPool, id: Uuid, folder: &str) -> Result<ContactMessage> {
    let folder = MessageFolder::parse(folder)
        .ok_or_else(|| StorageError::ConstraintViolation(format!("Unknown folder '{folder}'")))?;

    MessageRepository::new(pool).move_to_folder(id, folder).await
}

/// Store the reply, then email it to the sender with the same
/// best-effort policy as status notifications: the stored row is the
/// source of truth, delivery is attempted once and not retried.
pub async fn reply_to_message(
    pool: &PgPool,
    mailer: &dyn Mailer,
    id: Uuid,
    body: &str,
) -> Result<MessageReply> {
    let repo = MessageRepository::new(pool);
    let message = repo.find_by_id(id).await?;
    let reply = repo.add_reply(id, body).await?;

    let subject = format!("Re: {}", message.subject);
    if let Err(e) = mailer.send(&message.email, &subject, body).await {
        tracing::warn!(
            message_id = %id,
            to = %message.email,
            error = %e,
            "reply email failed"
        );
    }

    Ok(reply)
}

pub async fn delete_message(pool: &PgPool, id: Uuid) -> Result<()> {
    MessageRepository::new(pool).delete(id).await
}

fn parse_folder(folder: Option<&str>) -> Result<Option<MessageFolder>> {
    match folder {
        None => Ok(None),
        Some(raw) => MessageFolder::parse(raw)
            .map(Some)
            .ok_or_else(|| StorageError::ConstraintViolation(format!("Unknown folder '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_filter_accepts_known_names_only() {
        assert!(matches!(parse_folder(None), Ok(None)));
        assert!(matches!(
            parse_folder(Some("inbox")),
            Ok(Some(MessageFolder::Inbox))
        ));
        assert!(parse_folder(Some("junk")).is_err());
    }
}
