//! SecureApp Server — application entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use secureapp_auth::{AuthConfig, AuthService};
use secureapp_store::SqliteAccountStore;
use tracing_subscriber::EnvFilter;

mod api;

#[derive(Debug, Parser)]
#[command(name = "secureapp-server")]
#[command(about = "Password + TOTP two-factor authentication service")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "SECUREAPP_LISTEN", default_value = "127.0.0.1:8000")]
    listen: SocketAddr,

    /// SQLite database URL.
    #[arg(
        long,
        env = "SECUREAPP_DATABASE_URL",
        default_value = "sqlite://secureapp.db"
    )]
    database_url: String,

    /// Origin allowed by CORS (the frontend dev server).
    #[arg(
        long,
        env = "SECUREAPP_CORS_ORIGIN",
        default_value = "http://localhost:5173"
    )]
    cors_origin: String,

    /// Issuer name shown in authenticator apps.
    #[arg(long, env = "SECUREAPP_TOTP_ISSUER", default_value = "SecureApp")]
    totp_issuer: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("secureapp=info".parse()?))
        .json()
        .init();

    let store = SqliteAccountStore::connect(&cli.database_url).await?;
    let auth = AuthService::new(
        store,
        AuthConfig {
            totp_issuer: cli.totp_issuer,
            ..AuthConfig::default()
        },
    );

    let app = api::router(Arc::new(auth), &cli.cors_origin)?;

    tracing::info!(listen = %cli.listen, "SecureApp server listening");
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
