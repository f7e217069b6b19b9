//! SecureApp Core — domain model, shared error type, and the
//! account-store abstraction consumed by the auth layer.

pub mod error;
pub mod models;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use store::AccountStore;
