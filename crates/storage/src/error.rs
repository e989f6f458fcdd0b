use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Maps a unique-index failure to a readable conflict message,
    /// passing every other database error through unchanged.
    pub fn on_unique_violation(error: sqlx::Error, message: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = error {
            if db_err.code().as_deref() == Some("23505") {
                return StorageError::ConstraintViolation(message.to_string());
            }
        }
        StorageError::from(error)
    }
}
