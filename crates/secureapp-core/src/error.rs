//! Error types shared across the SecureApp crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Record not found: {entity} with key {key}")]
    NotFound { entity: String, key: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
