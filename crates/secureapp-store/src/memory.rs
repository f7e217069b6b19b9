//! In-memory [`AccountStore`] backed by a `HashMap`.
//!
//! Used by tests and local development. `insert` performs its
//! existence check and write under a single write lock, so the
//! uniqueness constraint holds under concurrent registrations.
//!
//! [`AccountStore`]: secureapp_core::store::AccountStore

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use secureapp_core::error::{CoreError, CoreResult};
use secureapp_core::models::user::{CreateUser, UpdateUser, User};
use secureapp_core::store::AccountStore;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct MemoryAccountStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryAccountStore {
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert(&self, input: CreateUser) -> CoreResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&input.username) {
            return Err(CoreError::AlreadyExists {
                entity: "user".into(),
            });
        }

        let now = Utc::now();
        let user = User {
            username: input.username.clone(),
            password_hash: input.password_hash,
            totp_enabled: false,
            totp_secret: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(input.username, user.clone());

        Ok(user)
    }

    async fn update(&self, username: &str, input: UpdateUser) -> CoreResult<User> {
        let mut users = self.users.write().await;

        let user = users.get_mut(username).ok_or_else(|| CoreError::NotFound {
            entity: "user".into(),
            key: username.to_string(),
        })?;

        if let Some(totp_enabled) = input.totp_enabled {
            user.totp_enabled = totp_enabled;
        }
        if let Some(totp_secret) = input.totp_secret {
            user.totp_secret = Some(totp_secret);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}
