//! Authentication configuration.

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer name embedded in provisioning URIs and shown in
    /// authenticator apps.
    pub totp_issuer: String,
    /// bcrypt work factor (default: [`bcrypt::DEFAULT_COST`]).
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            totp_issuer: "SecureApp".into(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
