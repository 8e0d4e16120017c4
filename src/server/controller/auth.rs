use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            json::ApiJson,
            session::{AuthSession, CsrfSession},
        },
        model::user::CreateUserParams,
        service::{auth::AuthService, oauth::OAuthService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters of the OAuth callback.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state, compared with the value stored in the session.
    pub state: String,
    /// Authorization code exchanged for an access token.
    pub code: String,
}

/// Create an account and log it in.
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Blank field, invalid email or password too short
/// - `409 Conflict` - Email already in use
#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;
    let user = AuthService::new(&state.db).register(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The logged in account
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Clear the session.
#[utoipa::path(
    delete,
    path = "/api/v1/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Redirect to the OAuth provider's authorization page.
///
/// The CSRF state of the request is kept in the session until the callback.
#[utoipa::path(
    get,
    path = "/api/v1/oauth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_service = OAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_provider,
    );

    let (url, csrf_token) = oauth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete the OAuth login and redirect to the frontend.
///
/// # Returns
/// - `307 Temporary Redirect` - Logged in, redirected to `APP_URL`
/// - `400 Bad Request` - CSRF state mismatch, failed exchange or no email shared
#[utoipa::path(
    get,
    path = "/api/v1/oauth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by the provider"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 307, description = "Logged in, redirect to the frontend"),
        (status = 400, description = "Invalid callback", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn oauth_callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let user = OAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_provider,
    )
    .callback(params.code)
    .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} logged in with {}", user.id, state.oauth_provider.name);

    Ok(Redirect::temporary(&state.app_url))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match stored_state {
        Some(state) if state == csrf_state => Ok(()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
