use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ImageUploadForm},
        user::{PatchUserDto, PublicUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, json::ApiJson, session::AuthSession, upload::ImageFile},
        model::user::UpdateUserParams,
        service::{image::ImageService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the logged in user's account.
#[utoipa::path(
    get,
    path = "/api/v1/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current account", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get the public profile of a user.
#[utoipa::path(
    get,
    path = "/api/v1/user/{user_id}",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Public profile", body = PublicUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db).get(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_public_dto())))
}

/// Replace the username and email of the logged in user.
#[utoipa::path(
    put,
    path = "/api/v1/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_update_dto(user.id, payload)?;
    let user = UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update some fields of the logged in user, including the password.
#[utoipa::path(
    patch,
    path = "/api/v1/user",
    tag = USER_TAG,
    request_body = PatchUserDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_user(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<PatchUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_patch_dto(user.id, payload)?;
    let user = UserService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete the logged in user's account and end the session.
///
/// Workspaces created by the user are deleted with it.
#[utoipa::path(
    delete,
    path = "/api/v1/user",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db).delete(user.id).await?;
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload a new profile photo for the logged in user.
///
/// The previous photo is removed from storage.
#[utoipa::path(
    post,
    path = "/api/v1/update_profile_photo",
    tag = USER_TAG,
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Account with the new avatar URL", body = UserDto),
        (status = 400, description = "Missing or unsupported image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile_photo(
    State(state): State<AppState>,
    session: Session,
    ImageFile(image): ImageFile,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = ImageService::new(&state.db, &state.image_store)
        .update_profile_photo(user.id, image)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
