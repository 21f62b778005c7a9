// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage fault (connection loss, constraint violation, busy database)
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored version moved on between fetch and replace
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether a whole fetch-apply-replace cycle may be re-run after this error.
    ///
    /// Only storage faults and version conflicts qualify. Everything else is the
    /// caller's fault and would fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Conflict(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
