use std::sync::Arc;

use storage::Database;

use crate::mailer::Mailer;

/// Shared handler state: the connection pool plus the notification
/// dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(db: Database, mailer: Arc<dyn Mailer>) -> Self {
        Self { db, mailer }
    }
}
