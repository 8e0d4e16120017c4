use crate::server::error::AppError;

/// Trims `value` and rejects it when nothing is left.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Raw value from the request body
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - Value is empty or whitespace only
pub fn require_non_blank(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("Field '{}' cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Applies `require_non_blank` to a field that may be absent from a partial update.
pub fn optional_non_blank(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    value.map(|v| require_non_blank(field, v)).transpose()
}

/// Lowercases and trims an email address, rejecting values without an `@`.
pub fn normalize_email(value: String) -> Result<String, AppError> {
    let email = require_non_blank("email", value)?.to_lowercase();
    if !email.contains('@') {
        return Err(AppError::BadRequest(format!("'{}' is not a valid email", email)));
    }
    Ok(email)
}
