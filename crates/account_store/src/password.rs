//! Password hashing with Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entities::PasswordHash;

use crate::{AccountError, AccountResult};

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> AccountResult<PasswordHash> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AccountError::PasswordHashing(e.to_string()))?;
    Ok(PasswordHash::new(hash.to_string()))
}

/// Verifies a password against a stored hash.
///
/// Malformed stored values never verify.
pub fn verify_password(password: &str, stored: &PasswordHash) -> bool {
    let parsed = match argon2::PasswordHash::new(stored.as_str()) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash is malformed: {}", e);
            return false;
        }
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let stored = hash_password("secret-123").unwrap();

        assert!(verify_password("secret-123", &stored));
        assert!(!verify_password("secret-12", &stored));
        assert!(!verify_password("", &stored));
    }

    #[test]
    fn test_hash_is_salted_phc_string() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert!(first.as_str().starts_with("$argon2id$"));
        assert_ne!(first, second);
        assert!(!first.as_str().contains("same"));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", &PasswordHash::new("???")));
        assert!(!verify_password("", &PasswordHash::new("")));
    }
}
