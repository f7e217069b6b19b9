//! Account-store trait definition for data access abstraction.
//!
//! All store operations are async and scoped to a single logical
//! request; implementations must make `insert` atomic with respect to
//! the username uniqueness constraint so that concurrent inserts of
//! the same username cannot both succeed.

use std::future::Future;

use crate::error::CoreResult;
use crate::models::user::{CreateUser, UpdateUser, User};

pub trait AccountStore: Send + Sync {
    /// Look up a user by exact username match.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = CoreResult<Option<User>>> + Send;

    /// Insert a new user. Fails with [`CoreError::AlreadyExists`] if
    /// the username is taken, including when a concurrent insert won
    /// the race after the caller's own pre-check.
    ///
    /// [`CoreError::AlreadyExists`]: crate::error::CoreError::AlreadyExists
    fn insert(&self, input: CreateUser) -> impl Future<Output = CoreResult<User>> + Send;

    /// Apply a partial update to an existing user. Fails with
    /// [`CoreError::NotFound`] if the username is unknown.
    ///
    /// [`CoreError::NotFound`]: crate::error::CoreError::NotFound
    fn update(
        &self,
        username: &str,
        input: UpdateUser,
    ) -> impl Future<Output = CoreResult<User>> + Send;
}
