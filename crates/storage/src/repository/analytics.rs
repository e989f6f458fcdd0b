use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::Result;

/// Aggregate counts for the admin dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardCounts {
    pub total_applications: i64,
    pub pending_applications: i64,
    pub approved_applications: i64,
    pub rejected_applications: i64,
    pub unread_messages: i64,
    pub published_events: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct EventApplicationCount {
    pub event_id: Uuid,
    pub title: String,
    pub applications: i64,
}

pub struct AnalyticsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn dashboard_counts(&self) -> Result<DashboardCounts> {
        let (total, pending, approved, rejected) = sqlx::query_as::<_, (i64, i64, i64, i64)>(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE status = 'pending'),
                COUNT(*) FILTER (WHERE status = 'approved'),
                COUNT(*) FILTER (WHERE status = 'rejected')
            FROM applications
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        let unread_messages = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_messages WHERE read = FALSE AND folder = 'inbox'",
        )
        .fetch_one(self.pool)
        .await?;

        let published_events = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM events WHERE status = 'published'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(DashboardCounts {
            total_applications: total,
            pending_applications: pending,
            approved_applications: approved,
            rejected_applications: rejected,
            unread_messages,
            published_events,
        })
    }

    pub async fn applications_per_event(&self) -> Result<Vec<EventApplicationCount>> {
        let rows = sqlx::query_as::<_, EventApplicationCount>(
            r#"
            SELECT e.event_id, e.title, COUNT(a.application_id) AS applications
            FROM events e
            LEFT JOIN applications a ON a.event_id = e.event_id
            GROUP BY e.event_id, e.title
            ORDER BY applications DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
