use sqlx::PgPool;
use storage::{
    dto::event::{CreateEventRequest, UpdateEventRequest},
    error::Result,
    models::Event,
    repository::event::EventRepository,
};
use uuid::Uuid;

pub async fn list_published_events(pool: &PgPool) -> Result<Vec<Event>> {
    EventRepository::new(pool).list_published().await
}

pub async fn list_all_events(pool: &PgPool) -> Result<Vec<Event>> {
    EventRepository::new(pool).list().await
}

pub async fn get_event_by_slug(pool: &PgPool, slug: &str) -> Result<Event> {
    EventRepository::new(pool).find_by_slug(slug).await
}

pub async fn get_active_event(pool: &PgPool) -> Result<Option<Event>> {
    EventRepository::new(pool).find_active().await
}

pub async fn create_event(pool: &PgPool, req: &CreateEventRequest) -> Result<Event> {
    EventRepository::new(pool).create(req).await
}

/// Partial update: absent fields keep their stored values.
pub async fn update_event(pool: &PgPool, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    repo.update(
        id,
        req.title.clone().unwrap_or(existing.title),
        req.slug.clone().unwrap_or(existing.slug),
        req.description.clone().or(existing.description),
        req.date.unwrap_or(existing.date),
        req.location.clone().unwrap_or(existing.location),
        req.status.clone().unwrap_or(existing.status),
    )
    .await
}

pub async fn activate_event(pool: &PgPool, id: Uuid) -> Result<Event> {
    EventRepository::new(pool).activate(id).await
}

pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<()> {
    EventRepository::new(pool).delete(id).await
}
