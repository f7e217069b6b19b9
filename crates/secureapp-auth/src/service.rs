//! Authentication service — register, login, and two-factor
//! orchestration over an [`AccountStore`].

use secureapp_core::error::CoreError;
use secureapp_core::models::user::{CreateUser, UpdateUser};
use secureapp_core::store::AccountStore;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::{otp, password, totp};

/// Outcome of a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials valid, no 2FA configured — login is complete.
    Complete,
    /// Credentials valid but 2FA is enabled; the caller must follow
    /// up with [`AuthService::verify_two_factor`]. Carries only the
    /// username — never the hash or secret.
    TwoFactorRequired { username: String },
}

/// Result of enabling 2FA: the provisioning URI for client-side
/// enrollment (e.g. rendering as a scannable image).
#[derive(Debug, Clone)]
pub struct TwoFactorEnrollment {
    pub provisioning_uri: String,
}

/// Authentication service.
///
/// Generic over the store implementation so the auth layer has no
/// dependency on any particular persistence backend.
pub struct AuthService<S: AccountStore> {
    store: S,
    config: AuthConfig,
}

impl<S: AccountStore> AuthService<S> {
    pub fn new(store: S, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Create a new account with a hashed password and 2FA disabled.
    ///
    /// The username check is check-then-insert; a concurrent insert
    /// that wins the race surfaces as the same
    /// [`AuthError::DuplicateUsername`] via the store's uniqueness
    /// constraint.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if self.store.find_by_username(username).await?.is_some() {
            return Err(AuthError::DuplicateUsername);
        }

        let password_hash = password::hash_password(password, self.config.bcrypt_cost)?;

        self.store
            .insert(CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                CoreError::AlreadyExists { .. } => AuthError::DuplicateUsername,
                other => other.into(),
            })?;

        Ok(())
    }

    /// Check credentials. Unknown username and wrong password both
    /// yield [`AuthError::InvalidCredentials`] so the two cases are
    /// indistinguishable to the caller.
    ///
    /// With 2FA enabled the result is a challenge, not a completed
    /// login; no session artifact is issued either way.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        if user.totp_enabled {
            Ok(LoginOutcome::TwoFactorRequired {
                username: user.username,
            })
        } else {
            Ok(LoginOutcome::Complete)
        }
    }

    /// Generate a TOTP secret for the user, persist it together with
    /// the enabled flag, and return the provisioning URI.
    ///
    /// Re-enabling always rotates the secret: any prior secret is
    /// overwritten unconditionally. The flag is set immediately, not
    /// gated on a first successful code verification.
    pub async fn enable_two_factor(
        &self,
        username: &str,
    ) -> Result<TwoFactorEnrollment, AuthError> {
        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let secret = otp::generate_secret();
        let provisioning_uri =
            totp::provisioning_uri(&user.username, &secret, &self.config.totp_issuer)?;

        self.store
            .update(
                &user.username,
                UpdateUser {
                    totp_enabled: Some(true),
                    totp_secret: Some(secret),
                },
            )
            .await
            .map_err(|e| match e {
                CoreError::NotFound { .. } => AuthError::UserNotFound,
                other => other.into(),
            })?;

        Ok(TwoFactorEnrollment { provisioning_uri })
    }

    /// Check a 2FA code. A standalone check: success does not
    /// complete a login or issue anything.
    ///
    /// Unknown users and users without an enrolled secret both fail
    /// with [`AuthError::TwoFactorNotEnabled`] — a distinct error
    /// from a wrong code.
    pub async fn verify_two_factor(&self, username: &str, code: &str) -> Result<(), AuthError> {
        let secret = self
            .store
            .find_by_username(username)
            .await?
            .filter(|u| u.totp_enabled)
            .and_then(|u| u.totp_secret)
            .ok_or(AuthError::TwoFactorNotEnabled)?;

        if !totp::verify_code(&secret, code, None) {
            return Err(AuthError::InvalidCode);
        }

        Ok(())
    }
}
