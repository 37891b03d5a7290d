//! Credential hashing for stored user passwords.
//!
//! Stored credentials are Argon2id PHC strings, so parameters and salt travel
//! with the hash. Principal lookup hands the stored string over untouched;
//! login and the admin bootstrap are the only places that look inside it.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use storefront_core::error::CoreError;

use crate::error::AppError;

/// Shortest password accepted for a bootstrapped account.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
pub fn check_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Hash `password` into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Check a submitted password against a stored PHC string.
///
/// A mismatch is `Ok(false)`. A stored value that is not a PHC string is an
/// internal error, since it means the `users` row was written by something
/// other than [`hash_password`].
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| AppError::InternalError(format!("Stored credential unreadable: {e}")))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::InternalError(format!(
            "Password verification error: {e}"
        ))),
    }
}
