/**
 * Password Hashing
 *
 * Salted bcrypt hashing for stored credentials. Plaintext passwords only
 * exist inside the register/login handlers; everything else sees the hash.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::ApiError;

/// Hash a plaintext password with a fresh salt
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    hash(password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {e:?}");
        ApiError::internal("password hashing failed")
    })
}

/// Check a plaintext password against a stored hash
///
/// A malformed stored hash counts as a failed check rather than an error;
/// the caller cannot do anything better with it.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or_else(|e| {
        tracing::error!("failed to verify password hash: {e:?}");
        false
    })
}
