//! Account store error types.

use thiserror::Error;

/// Errors raised by key-value backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A lock guarding the backend was poisoned.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// Key cannot be used by this backend.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// Result type for key-value backend operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Registration with an email that is already taken.
    #[error("User already exists: {0}")]
    DuplicateEmail(String),

    /// No user matches the email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A required registration field is blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// No user with this email.
    #[error("User not found: {0}")]
    NotFound(String),

    /// Password could not be hashed.
    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    /// Backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for account operations.
pub type AccountResult<T> = Result<T, AccountError>;
