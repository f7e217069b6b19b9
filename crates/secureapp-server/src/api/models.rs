//! Request and response bodies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyTwoFactorRequest {
    pub username: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LoginResponse {
    Complete {
        message: String,
    },
    TwoFactorRequired {
        #[serde(rename = "2fa_required")]
        two_factor_required: bool,
        username: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EnableTwoFactorResponse {
    pub provisioning_uri: String,
}
