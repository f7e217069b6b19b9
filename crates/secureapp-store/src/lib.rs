//! SecureApp Store — [`AccountStore`] implementations.
//!
//! Two backends:
//! - [`MemoryAccountStore`] for tests and development,
//! - [`SqliteAccountStore`] for durable storage via `sqlx`.
//!
//! Both enforce username uniqueness at the storage layer, so a
//! concurrent insert that slips past the auth service's pre-check is
//! still rejected with a conflict.
//!
//! [`AccountStore`]: secureapp_core::store::AccountStore

mod error;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryAccountStore;
pub use sqlite::SqliteAccountStore;
