use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A race registration. The profile fields are a snapshot taken at
/// submission time and are never re-synced from the account afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Application {
    pub application_id: Uuid,
    pub event_id: Uuid,
    /// Absent for admin-entered or legacy records.
    pub user_id: Option<Uuid>,
    pub full_name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub city: String,
    pub club: Option<String>,
    pub category: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub receipt_url: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl Application {
    pub fn status(&self) -> Option<ApplicationStatus> {
        ApplicationStatus::parse(&self.status)
    }
}

/// Lifecycle of an application: `pending` on creation, then a single
/// one-way admin decision. Neither terminal state can be left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }
}

/// Race distance selected on the form; immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RaceCategory {
    Long,
    Short,
}

impl RaceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

/// Form-layer guard: at most one non-rejected application per
/// (user, event). Evaluated over a snapshot read taken before the
/// insert; nothing in the schema backs it, so two concurrent
/// submissions can both pass and both commit.
pub fn has_active_application(existing: &[Application]) -> bool {
    existing
        .iter()
        .any(|a| a.status() != Some(ApplicationStatus::Rejected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn sample(status: &str) -> Application {
        Application {
            application_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            user_id: Some(Uuid::new_v4()),
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

    #[test]
    fn pending_can_reach_both_terminal_states() {
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Approved));
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Rejected));
    }

    #[test]
    fn terminal_states_allow_no_transition() {
        for from in [ApplicationStatus::Approved, ApplicationStatus::Rejected] {
            for to in [
                ApplicationStatus::Pending,
                ApplicationStatus::Approved,
                ApplicationStatus::Rejected,
            ] {
                assert!(!from.can_transition_to(to));
            }
        }
        assert!(!ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Pending));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse("cancelled"), None);
    }

    #[test]
    fn guard_treats_pending_and_approved_as_active() {
        assert!(has_active_application(&[sample("pending")]));
        assert!(has_active_application(&[sample("approved")]));
        assert!(!has_active_application(&[sample("rejected")]));
        assert!(!has_active_application(&[]));
    }

    // The guard only sees the snapshot it is given. Two submissions that
    // both read an empty snapshot both pass, and both rows land: the
    // documented check-then-act gap, reproduced here deterministically.
    #[test]
    fn guard_cannot_see_concurrent_submissions() {
        let snapshot: Vec<Application> = Vec::new();

        let first_passes = !has_active_application(&snapshot);
        let second_passes = !has_active_application(&snapshot);
        assert!(first_passes && second_passes);

        let mut rows = snapshot;
        rows.push(sample("pending"));
        rows.push(sample("pending"));
        assert_eq!(
            rows.iter().filter(|a| a.status == "pending").count(),
            2,
            "both submissions commit as pending"
        );
    }
}
