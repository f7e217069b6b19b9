//! User domain model.
//!
//! Usernames are the unique key and are matched exactly
//! (case-sensitive). `totp_enabled` and `totp_secret` are set
//! together by the enable-2FA flow and never cleared — there is no
//! disable path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// bcrypt hash; the plaintext password is never stored or logged.
    pub password_hash: String,
    pub totp_enabled: bool,
    /// Base32-encoded TOTP secret, present once 2FA has been enabled.
    pub totp_secret: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    /// Already hashed — stores never see the plaintext.
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub totp_enabled: Option<bool>,
    pub totp_secret: Option<String>,
}
