//! Ledger store error types

use thiserror::Error;

/// Errors surfaced by the ledger store.
///
/// The store performs no local recovery and no retries: every error reaches
/// the caller as-is, or wrapped with rollback context when rollback itself
/// failed. Transient-vs-permanent classification belongs to the caller.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("account {0} not found")]
    AccountNotFound(i64),

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("record not found")]
    NotFound,

    /// The database rejected a write (uniqueness, foreign key, check).
    #[error("constraint violation ({constraint}): {message}")]
    Constraint { constraint: String, message: String },

    /// Could not open a transaction; the unit of work never ran.
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sqlx::Error),

    /// The unit of work failed and rollback failed too. Both causes are
    /// preserved; neither is silently dropped.
    #[error("transaction failed: {cause}; rollback also failed: {rollback}")]
    Rollback {
        cause: Box<StoreError>,
        #[source]
        rollback: sqlx::Error,
    },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Stable machine-readable code for the caller-facing API layer
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            StoreError::UserNotFound(_) => "USER_NOT_FOUND",
            StoreError::NotFound => "NOT_FOUND",
            StoreError::Constraint { .. } => "CONSTRAINT_VIOLATION",
            StoreError::Begin(_) => "TX_BEGIN_FAILED",
            StoreError::Rollback { .. } => "TX_ROLLBACK_FAILED",
            StoreError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Database(db) => match db.constraint() {
                Some(constraint) => StoreError::Constraint {
                    constraint: constraint.to_string(),
                    message: db.message().to_string(),
                },
                None => StoreError::Database(sqlx::Error::Database(db)),
            },
            other => StoreError::Database(other),
        }
    }
}
