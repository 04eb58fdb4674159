//! Locally persisted user accounts for Calmspace.
//!
//! This crate provides the account store: every registered user plus the
//! active session, persisted as whole JSON documents to a key-value backend.
//! Backends are available in memory (tests, ephemeral sessions) and on disk.

mod error;
mod file;
mod kv;
mod password;
mod store;

pub use error::*;
pub use file::*;
pub use kv::*;
pub use password::*;
pub use store::*;

/// Backend key holding the serialized list of users.
pub const USERS_KEY: &str = "users";

/// Backend key holding the serialized active user, absent when logged out.
pub const CURRENT_USER_KEY: &str = "currentUser";
