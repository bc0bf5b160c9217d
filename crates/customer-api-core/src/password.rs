//! Password hashing with bcrypt.
//!
//! Customer passwords are never stored or compared in plain text. The hash
//! embeds its own salt and cost, so [`verify_password`] needs only the
//! candidate password and the stored hash.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal_error(format!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on a mismatch and an error only when `hash` is not a
/// valid bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal_error(format!("Failed to verify password: {}", e)))
}
