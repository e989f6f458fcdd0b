use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

const COLUMNS: &str =
    "event_id, title, slug, description, date, location, status, participants, active_event, created_at";

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            ORDER BY date DESC, created_at DESC
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn list_published(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            WHERE status = 'published'
            ORDER BY date ASC
            "#
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            WHERE event_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            WHERE slug = $1
            "#
        ))
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// The event flagged as the site's featured one, if any.
    pub async fn find_active(&self) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM events
            WHERE active_event = TRUE
            LIMIT 1
            "#
        ))
        .fetch_optional(self.pool)
        .await?;

        Ok(event)
    }

    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (title, slug, description, date, location, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&req.title)
        .bind(&req.slug)
        .bind(&req.description)
        .bind(req.date)
        .bind(&req.location)
        .bind(&req.status)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Slug already exists"))?;

        Ok(event)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        title: String,
        slug: String,
        description: Option<String>,
        date: chrono::NaiveDate,
        location: String,
        status: String,
    ) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET title = $2, slug = $3, description = $4, date = $5, location = $6, status = $7
            WHERE event_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(title)
        .bind(slug)
        .bind(description)
        .bind(date)
        .bind(location)
        .bind(status)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Slug already exists"))?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Make this event the featured one. Two statements, no transaction:
    /// the single-active-event rule is a convention the admin UI relies
    /// on, not something the schema enforces.
    pub async fn activate(&self, id: Uuid) -> Result<Event> {
        sqlx::query("UPDATE events SET active_event = FALSE WHERE active_event = TRUE")
            .execute(self.pool)
            .await?;

        let event = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET active_event = TRUE
            WHERE event_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Bump the denormalized registration counter. Read-then-write with
    /// no atomic increment; concurrent submissions can lose counts and
    /// the column is never decremented.
    pub async fn increment_participants(&self, id: Uuid) -> Result<i32> {
        let current = sqlx::query_scalar::<_, i32>(
            "SELECT participants FROM events WHERE event_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let next = current + 1;

        sqlx::query("UPDATE events SET participants = $2 WHERE event_id = $1")
            .bind(id)
            .bind(next)
            .execute(self.pool)
            .await?;

        Ok(next)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
