use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application::{ApplicationFilter, CreateApplicationRequest};
use crate::error::{Result, StorageError};
use crate::models::{Application, ApplicationStatus};

/// Repository for Application database operations
pub struct ApplicationRepository<'a> {
    pool: &'a PgPool,
}

const COLUMNS: &str = "application_id, event_id, user_id, full_name, national_id, email, phone, \
                       birth_date, gender, city, club, category, emergency_contact_name, \
                       emergency_contact_phone, receipt_url, status, created_at";

impl<'a> ApplicationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List applications, newest first, optionally narrowed by status
    /// and/or event.
    pub async fn list(
        &self,
        filter: &ApplicationFilter,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM applications
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR event_id = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&filter.status)
        .bind(filter.event_id)
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(self.pool)
        .await?;

        Ok(applications)
    }

    pub async fn count(&self, filter: &ApplicationFilter) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM applications
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR event_id = $2)
            "#,
        )
        .bind(&filter.status)
        .bind(filter.event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM applications
            WHERE application_id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(application)
    }

    /// Snapshot of every application a user has filed for an event.
    /// Consumed by the form-layer active-application guard.
    pub async fn find_by_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(&format!(
            r#"
            SELECT {COLUMNS}
            FROM applications
            WHERE user_id = $1 AND event_id = $2
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(applications)
    }

    /// Insert a new application. The status column defaults to pending
    /// in the schema; it is not accepted from the caller.
    pub async fn create(&self, req: &CreateApplicationRequest) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(&format!(
            r#"
            INSERT INTO applications (
                event_id, user_id, full_name, national_id, email, phone, birth_date,
                gender, city, club, category, emergency_contact_name,
                emergency_contact_phone, receipt_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(req.event_id)
        .bind(req.user_id)
        .bind(&req.full_name)
        .bind(&req.national_id)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(req.birth_date)
        .bind(&req.gender)
        .bind(&req.city)
        .bind(&req.club)
        .bind(&req.category)
        .bind(&req.emergency_contact_name)
        .bind(&req.emergency_contact_phone)
        .bind(&req.receipt_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Application already exists"))?;

        Ok(application)
    }

    /// Write the decided status. The caller is responsible for checking
    /// that the transition is legal before calling.
    pub async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> Result<Application> {
        let application = sqlx::query_as::<_, Application>(&format!(
            r#"
            UPDATE applications
            SET status = $2
            WHERE application_id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(application)
    }

    /// Unconditional hard delete; no history is kept.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM applications WHERE application_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
