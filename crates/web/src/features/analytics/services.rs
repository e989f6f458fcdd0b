use sqlx::PgPool;
use storage::{
    error::Result,
    repository::analytics::{AnalyticsRepository, DashboardCounts, EventApplicationCount},
};

pub async fn dashboard_counts(pool: &PgPool) -> Result<DashboardCounts> {
    AnalyticsRepository::new(pool).dashboard_counts().await
}

pub async fn applications_per_event(pool: &PgPool) -> Result<Vec<EventApplicationCount>> {
    AnalyticsRepository::new(pool).applications_per_event().await
}
