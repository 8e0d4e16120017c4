use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        activity::{ActivityDto, CreateActivityDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Get the history of a board, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/board/{board_id}/activities_history",
    tag = ACTIVITY_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 200, description = "History of the board", body = Vec<ActivityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let activities = ActivityService::new(&state.db)
        .get_by_board(board_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(activities.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/board/{board_id}/activity",
    tag = ACTIVITY_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    request_body = CreateActivityDto,
    responses(
        (status = 201, description = "Entry added", body = ActivityDto),
        (status = 400, description = "Blank message", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let activity = ActivityService::new(&state.db)
        .create(board_id, payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(activity.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/board/{board_id}/activity/{activity_id}",
    tag = ACTIVITY_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ("activity_id" = i32, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board or entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    session: Session,
    Path((board_id, activity_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    ActivityService::new(&state.db)
        .delete(board_id, activity_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/board/{board_id}/activities_history",
    tag = ACTIVITY_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 204, description = "History cleared"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_activities(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    ActivityService::new(&state.db).clear(board_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
