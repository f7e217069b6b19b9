//! Store-specific error types and conversions.

use secureapp_core::error::CoreError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Record not found: {entity} with key {key}")]
    NotFound { entity: String, key: String },

    #[error("Unique constraint violated: {entity}")]
    Conflict { entity: String },
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, key } => CoreError::NotFound { entity, key },
            StoreError::Conflict { entity } => CoreError::AlreadyExists { entity },
            other => CoreError::Database(other.to_string()),
        }
    }
}
