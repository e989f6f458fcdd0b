use sqlx::PgPool;
use storage::{
    dto::application::{ApplicationFilter, CreateApplicationRequest, StatusDecision},
    error::{Result, StorageError},
    models::{Application, ApplicationStatus, application},
    repository::{application::ApplicationRepository, event::EventRepository},
};
use uuid::Uuid;

use crate::mailer::Mailer;

/// Insert the registration, then bump the event's denormalized counter.
/// The two writes are independent round trips: a failed insert skips the
/// bump entirely, and the bump itself is read-then-write.
pub async fn submit_application(
    pool: &PgPool,
    req: &CreateApplicationRequest,
) -> Result<Application> {
    let repo = ApplicationRepository::new(pool);
    let application = repo.create(req).await?;

    let new_count = EventRepository::new(pool)
        .increment_participants(application.event_id)
        .await?;

    tracing::info!(
        application_id = %application.application_id,
        event_id = %application.event_id,
        participants = new_count,
        "application submitted"
    );

    Ok(application)
}

/// Form-layer duplicate check, issued as a separate read before the
/// form posts. Nothing re-checks at insert time, so two concurrent
/// submissions can both see a clean snapshot and both commit.
pub async fn has_active_application(pool: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<bool> {
    let snapshot = ApplicationRepository::new(pool)
        .find_by_user_and_event(user_id, event_id)
        .await?;

    Ok(application::has_active_application(&snapshot))
}

pub async fn list_applications(
    pool: &PgPool,
    filter: &ApplicationFilter,
    limit: u32,
    offset: u32,
) -> Result<(Vec<Application>, i64)> {
    let repo = ApplicationRepository::new(pool);
    let applications = repo.list(filter, limit, offset).await?;
    let total = repo.count(filter).await?;

    Ok((applications, total))
}

pub async fn get_application(pool: &PgPool, id: Uuid) -> Result<Application> {
    ApplicationRepository::new(pool).find_by_id(id).await
}

/// Commit the admin decision, then tell the applicant. The status write
/// is authoritative: a failed email is logged and the operation still
/// reports success, because the transition has already been committed.
pub async fn update_application_status(
    pool: &PgPool,
    mailer: &dyn Mailer,
    id: Uuid,
    decision: StatusDecision,
) -> Result<Application> {
    let repo = ApplicationRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let current = existing.status().ok_or_else(|| {
        StorageError::ConstraintViolation(format!("Unknown status '{}' on record", existing.status))
    })?;

    let next = decision.as_status();
    if !current.can_transition_to(next) {
        return Err(StorageError::ConstraintViolation(format!(
            "Cannot move a {} application to {}",
            current.as_str(),
            next.as_str()
        )));
    }

    let updated = repo.update_status(id, next).await?;

    notify_applicant(mailer, &updated).await;

    Ok(updated)
}

pub async fn delete_application(pool: &PgPool, id: Uuid) -> Result<()> {
    ApplicationRepository::new(pool).delete(id).await
}

/// Single dispatch attempt, after commit. Failures are downgraded to a
/// warning; there is no retry and no queue.
pub async fn notify_applicant(mailer: &dyn Mailer, application: &Application) {
    let Some((subject, html_body)) = decision_email(application) else {
        return;
    };

    if let Err(e) = mailer.send(&application.email, &subject, &html_body).await {
        tracing::warn!(
            application_id = %application.application_id,
            to = %application.email,
            error = %e,
            "status notification failed"
        );
    }
}

/// Outcome email content for a decided application; `None` while the
/// record is still pending.
pub fn decision_email(application: &Application) -> Option<(String, String)> {
    match application.status() {
        Some(ApplicationStatus::Approved) => Some((
            "Your registration is confirmed".to_string(),
            format!(
                "<html><body>\
                 <h2>See you at the start line, {name}!</h2>\
                 <p>Your registration for the {category} course has been approved. \
                 Your participant card will be available at race-pack pickup.</p>\
                 </body></html>",
                name = application.full_name,
                category = application.category,
            ),
        )),
        Some(ApplicationStatus::Rejected) => Some((
            "About your registration".to_string(),
            format!(
                "<html><body>\
                 <h2>Hello {name},</h2>\
                 <p>Unfortunately we could not accept your registration this time. \
                 You are welcome to submit a new application.</p>\
                 </body></html>",
                name = application.full_name,
            ),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::test_support::{FailingMailer, RecordingMailer};
    use chrono::NaiveDate;
    use std::sync::atomic::Ordering;

    fn decided(status: &str) -> Application {
        Application {
            application_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            user_id: None,
            full_name: "Ada Lovelace".to_string(),
            national_id: "12345678901".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+905551112233".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            gender: "female".to_string(),
            city: "Izmir".to_string(),
            club: None,
            category: "long".to_string(),
            emergency_contact_name: "Charles Babbage".to_string(),
            emergency_contact_phone: "+905554445566".to_string(),
            receipt_url: None,
            status: status.to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 10)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    // The transition is already committed when dispatch happens, so a
    // dead mail provider must not turn the operation into a failure.
    #[tokio::test]
    async fn notification_failure_is_swallowed() {
        let mailer = FailingMailer::default();
        notify_applicant(&mailer, &decided("approved")).await;
        assert_eq!(mailer.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn notification_is_attempted_exactly_once_per_decision() {
        let mailer = RecordingMailer::default();
        notify_applicant(&mailer, &decided("rejected")).await;

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "ada@example.com");
    }

    #[tokio::test]
    async fn pending_records_produce_no_notification() {
        let mailer = RecordingMailer::default();
        notify_applicant(&mailer, &decided("pending")).await;
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn approval_email_names_the_course() {
        let (subject, body) = decision_email(&decided("approved")).unwrap();
        assert_eq!(subject, "Your registration is confirmed");
        assert!(body.contains("Ada Lovelace"));
        assert!(body.contains("long"));
    }

    #[test]
    fn rejection_email_offers_resubmission() {
        let (_, body) = decision_email(&decided("rejected")).unwrap();
        assert!(body.contains("submit a new application"));
    }
}
