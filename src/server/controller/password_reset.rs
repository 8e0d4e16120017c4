use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{ResetPasswordDto, SendVerificationDto},
    },
    server::{
        error::AppError, middleware::json::ApiJson,
        model::verification_code::ResetPasswordParams,
        service::password_reset::PasswordResetService, state::AppState,
    },
};

/// Tag for grouping password reset endpoints in OpenAPI documentation
pub static PASSWORD_RESET_TAG: &str = "password_reset";

/// Mail a password reset code to an account.
///
/// A code pending for the account is replaced. The code expires after 15 minutes.
#[utoipa::path(
    post,
    path = "/api/v1/send_email_verification",
    tag = PASSWORD_RESET_TAG,
    request_body = SendVerificationDto,
    responses(
        (status = 204, description = "Code sent"),
        (status = 400, description = "Invalid email or no account uses it", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_email_verification(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SendVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, &state.mailer)
        .send_code(payload.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set a new password with a mailed code.
#[utoipa::path(
    patch,
    path = "/api/v1/reset_password",
    tag = PASSWORD_RESET_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 204, description = "Password replaced"),
        (status = 400, description = "Invalid email, code or password", body = ErrorDto),
        (status = 404, description = "No matching code is pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = ResetPasswordParams::from_dto(payload)?;

    PasswordResetService::new(&state.db, &state.mailer)
        .reset_password(params)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancel the pending reset code of an email.
#[utoipa::path(
    delete,
    path = "/api/v1/reset_code/{email}",
    tag = PASSWORD_RESET_TAG,
    params(("email" = String, Path, description = "Email of the account")),
    responses(
        (status = 204, description = "No code is pending anymore"),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reset_code(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    PasswordResetService::new(&state.db, &state.mailer)
        .delete_code(email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
