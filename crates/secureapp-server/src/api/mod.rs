//! HTTP surface: routing, request/response types, and error mapping.

mod error;
mod handlers;
mod models;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::post;
use axum::Router;
use secureapp_auth::AuthService;
use secureapp_store::SqliteAccountStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub type SharedAuthService = Arc<AuthService<SqliteAccountStore>>;

pub fn router(auth: SharedAuthService, cors_origin: &str) -> anyhow::Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/enable-2fa/:username", post(handlers::enable_two_factor))
        .route("/verify-2fa", post(handlers::verify_two_factor))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(auth))
}
