//! Maps auth-layer error kinds to transport status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use secureapp_auth::AuthError;
use serde_json::json;

pub struct ApiError(AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AuthError::DuplicateUsername
            | AuthError::TwoFactorNotEnabled
            | AuthError::InvalidCode
            | AuthError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Crypto(_) | AuthError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
            // Internal detail stays out of the response body.
            return (status, Json(json!({ "detail": "internal server error" }))).into_response();
        }

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
