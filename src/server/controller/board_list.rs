use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        list::{CreateListDto, ListDto, MoveListDto, RenameListDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        service::board_list::BoardListService,
        state::AppState,
        util::validate::require_non_blank,
    },
};

/// Tag for grouping list endpoints in OpenAPI documentation
pub static LIST_TAG: &str = "list";

/// Get the lists of a board ordered by position.
#[utoipa::path(
    get,
    path = "/api/v1/board/{board_id}/lists",
    tag = LIST_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Lists of the board", body = Vec<ListDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lists(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let lists = BoardListService::new(&state.db)
        .get_by_board(board_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(lists.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/board/{board_id}/list/{list_id}",
    tag = LIST_TAG,
    params(
        ("board_id" = i32, Path, description = "Board ID"),
        ("list_id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List", body = ListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board or list not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_list(
    State(state): State<AppState>,
    session: Session,
    Path((board_id, list_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let list = BoardListService::new(&state.db)
        .get(board_id, list_id)
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Append a list at the end of a board.
#[utoipa::path(
    post,
    path = "/api/v1/board/{board_id}/list",
    tag = LIST_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    request_body = CreateListDto,
    responses(
        (status = 201, description = "List created", body = ListDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateListDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let name = require_non_blank("name", payload.name)?;
    let list = BoardListService::new(&state.db)
        .create(board_id, name)
        .await?;

    Ok((StatusCode::CREATED, Json(list.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/list/{list_id}/name",
    tag = LIST_TAG,
    params(("list_id" = i32, Path, description = "List ID")),
    request_body = RenameListDto,
    responses(
        (status = 200, description = "List renamed", body = ListDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn rename_list(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<i32>,
    ApiJson(payload): ApiJson<RenameListDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let name = require_non_blank("name", payload.name)?;
    let list = BoardListService::new(&state.db)
        .rename(list_id, name)
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Move a list to another position of its board.
///
/// Lists between the old and the new position shift by one so positions stay `1..=N`.
///
/// # Returns
/// - `200 OK` - The list at its new position
/// - `403 Forbidden` - Position outside `1..=N`, or user is not a member
#[utoipa::path(
    patch,
    path = "/api/v1/list/{list_id}/position",
    tag = LIST_TAG,
    params(("list_id" = i32, Path, description = "List ID")),
    request_body = MoveListDto,
    responses(
        (status = 200, description = "List moved", body = ListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Position out of range or user is not a member", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_list(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<i32>,
    ApiJson(payload): ApiJson<MoveListDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let list = BoardListService::new(&state.db)
        .move_to(list_id, payload.position)
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

/// Delete a list with its cards. Following lists move up by one.
#[utoipa::path(
    delete,
    path = "/api/v1/list/{list_id}",
    tag = LIST_TAG,
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 204, description = "List deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    BoardListService::new(&state.db).delete(list_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
