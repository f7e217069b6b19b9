//! Domain models.

pub mod user;

pub use user::{CreateUser, UpdateUser, User};
