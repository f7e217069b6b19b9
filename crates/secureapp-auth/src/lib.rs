//! SecureApp Auth — password hashing/verification, TOTP secret
//! provisioning, and two-factor code validation.

pub mod config;
pub mod error;
pub mod otp;
pub mod password;
pub mod service;
pub mod totp;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthService, LoginOutcome, TwoFactorEnrollment};
