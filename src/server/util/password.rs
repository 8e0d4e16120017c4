//! Password hashing.
//!
//! Passwords are stored as Argon2id hashes in PHC string format, so the salt and the
//! cost parameters travel with the hash. Accounts created through OAuth carry no
//! password at all.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

const SALT_BYTES: usize = 16;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes `password` under a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC string such as `$argon2id$v=19$m=19456,t=2,p=1$...`
/// - `Err(InternalError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let bytes: [u8; SALT_BYTES] = rand::random();
    let salt = SaltString::encode_b64(&bytes).map_err(hash_error)?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(hash_error)?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC string.
///
/// The digest comparison runs in constant time. A stored value that does not parse
/// never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn hash_error(err: argon2::password_hash::Error) -> AppError {
    InternalError::PasswordHash(err.to_string()).into()
}
