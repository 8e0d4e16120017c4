use thiserror::Error;

/// Internal issues indicating unexpected behavior and possible bugs.
///
/// Every variant results in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A container's child count disagrees with the number of stored children.
    #[error("{container} {id} counts {counter} children but holds {actual}")]
    CounterMismatch {
        /// Kind of container, `board` or `list`
        container: &'static str,
        id: i32,
        counter: i32,
        actual: usize,
    },

    /// The OAuth provider's user info response lacks a required field.
    #[error("OAuth user info response is missing field '{0}'")]
    MissingUserInfoField(&'static str),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
