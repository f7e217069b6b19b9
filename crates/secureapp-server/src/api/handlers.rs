//! Route handlers. Each one delegates to the auth service and maps
//! its typed result onto the wire; passwords, secrets, and codes are
//! never logged.

use axum::extract::{Path, State};
use axum::Json;
use secureapp_auth::LoginOutcome;

use super::error::ApiError;
use super::models::{
    EnableTwoFactorResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    VerifyTwoFactorRequest,
};
use super::SharedAuthService;

pub async fn register(
    State(auth): State<SharedAuthService>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!(username = %req.username, "register request");
    auth.register(&req.username, &req.password).await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully".into(),
    }))
}

pub async fn login(
    State(auth): State<SharedAuthService>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    tracing::info!(username = %req.username, "login request");

    let response = match auth.login(&req.username, &req.password).await? {
        LoginOutcome::Complete => LoginResponse::Complete {
            message: "Login successful (no 2FA)".into(),
        },
        LoginOutcome::TwoFactorRequired { username } => LoginResponse::TwoFactorRequired {
            two_factor_required: true,
            username,
        },
    };

    Ok(Json(response))
}

pub async fn enable_two_factor(
    State(auth): State<SharedAuthService>,
    Path(username): Path<String>,
) -> Result<Json<EnableTwoFactorResponse>, ApiError> {
    tracing::info!(username = %username, "enable-2fa request");
    let enrollment = auth.enable_two_factor(&username).await?;

    Ok(Json(EnableTwoFactorResponse {
        provisioning_uri: enrollment.provisioning_uri,
    }))
}

pub async fn verify_two_factor(
    State(auth): State<SharedAuthService>,
    Json(req): Json<VerifyTwoFactorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::info!(username = %req.username, "verify-2fa request");
    auth.verify_two_factor(&req.username, &req.code).await?;

    Ok(Json(MessageResponse {
        message: "2FA verification successful".into(),
    }))
}
