use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session. Results in 401 Unauthorized.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists. Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the right required for the operation. Results in 403 Forbidden.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Description of the missing right, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password. Results in 401 Unauthorized.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// CSRF state validation failed during OAuth callback. Results in 400 Bad Request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code exchange with the OAuth provider failed.
    ///
    /// Results in 400 Bad Request since the code usually expired or was reused.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    OAuthExchange(String),

    /// The provider did not share an email address for the account.
    #[error("OAuth provider did not return an email address")]
    OAuthMissingEmail,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic, the detailed error is logged at debug level.
///
/// # Returns
/// - 400 Bad Request - For OAuth login failures
/// - 401 Unauthorized - For missing sessions and invalid credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "You must be logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have the rights to perform this action",
            ),
            Self::CsrfValidationFailed | Self::OAuthExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::OAuthMissingEmail => (
                StatusCode::BAD_REQUEST,
                "Your account provider did not share an email address",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
