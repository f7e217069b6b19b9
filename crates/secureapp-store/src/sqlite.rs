//! SQLite implementation of [`AccountStore`].
//!
//! The `users` table keys on `username`, so duplicate inserts are
//! rejected by the database itself regardless of any pre-check in
//! the auth layer; the unique violation maps to
//! [`CoreError::AlreadyExists`].
//!
//! [`AccountStore`]: secureapp_core::store::AccountStore

use std::str::FromStr;

use chrono::{DateTime, Utc};
use secureapp_core::error::CoreResult;
use secureapp_core::models::user::{CreateUser, UpdateUser, User};
use secureapp_core::store::AccountStore;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreError;

const SCHEMA: &str = "\
    CREATE TABLE IF NOT EXISTS users (
        username      TEXT PRIMARY KEY,
        password_hash TEXT NOT NULL,
        totp_enabled  INTEGER NOT NULL DEFAULT 0,
        totp_secret   TEXT,
        created_at    TEXT NOT NULL,
        updated_at    TEXT NOT NULL
    )";

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
    totp_enabled: bool,
    totp_secret: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            username: row.username,
            password_hash: row.password_hash,
            totp_enabled: row.totp_enabled,
            totp_secret: row.totp_secret,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    /// Open (creating if necessary) the database at `url` and ensure
    /// the schema exists.
    ///
    /// SQLite permits one writer at a time; a single-connection pool
    /// also keeps `sqlite::memory:` databases coherent.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }
}

impl AccountStore for SqliteAccountStore {
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT username, password_hash, totp_enabled, totp_secret, \
                    created_at, updated_at \
             FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, input: CreateUser) -> CoreResult<User> {
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO users (username, password_hash, totp_enabled, totp_secret, \
                                created_at, updated_at) \
             VALUES (?1, ?2, 0, NULL, ?3, ?3)",
        )
        .bind(&input.username)
        .bind(&input.password_hash)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict {
                entity: "user".into(),
            },
            _ => StoreError::Sqlx(e),
        })?;

        Ok(User {
            username: input.username,
            password_hash: input.password_hash,
            totp_enabled: false,
            totp_secret: None,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, username: &str, input: UpdateUser) -> CoreResult<User> {
        let now = Utc::now();

        // COALESCE keeps columns untouched for absent fields; no
        // operation ever clears the secret once set.
        let result = sqlx::query(
            "UPDATE users SET \
                totp_enabled = COALESCE(?1, totp_enabled), \
                totp_secret  = COALESCE(?2, totp_secret), \
                updated_at   = ?3 \
             WHERE username = ?4",
        )
        .bind(input.totp_enabled)
        .bind(input.totp_secret.as_deref())
        .bind(now)
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(StoreError::from)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "user".into(),
                key: username.to_string(),
            }
            .into());
        }

        let user = self
            .find_by_username(username)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                entity: "user".into(),
                key: username.to_string(),
            })?;

        Ok(user)
    }
}
