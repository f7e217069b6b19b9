//! Authentication error types.
//!
//! Every failure path surfaces as a distinct variant; all are
//! terminal for the current request. `Display` output never contains
//! passwords, hashes, or secrets.

use secureapp_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username already exists")]
    DuplicateUsername,

    /// Covers both unknown username and wrong password so callers
    /// cannot enumerate accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("2FA is not enabled for this user")]
    TwoFactorNotEnabled,

    #[error("invalid 2FA code")]
    InvalidCode,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Store(#[from] CoreError),
}
