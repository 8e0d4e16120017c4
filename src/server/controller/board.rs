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
        board::{BoardDto, CreateBoardDto, PatchBoardDto, UpdateBoardDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        model::board::{CreateBoardParams, UpdateBoardParams},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Get the boards of a workspace.
#[utoipa::path(
    get,
    path = "/api/v1/workspace/{workspace_id}/boards",
    tag = BOARD_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    responses(
        (status = 200, description = "Boards of the workspace", body = Vec<BoardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_boards(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let boards = BoardService::new(&state.db)
        .get_by_workspace(workspace_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(boards.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a board.
#[utoipa::path(
    get,
    path = "/api/v1/board/{board_id}",
    tag = BOARD_TAG,
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board", body = BoardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    session: Session,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::BoardMember(board_id)])
        .await?;

    let board = BoardService::new(&state.db).get(board_id).await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Create a board without lists.
///
/// # Access Control
/// - `CreateBoard` - Admins, or members holding the board creation right
#[utoipa::path(
    post,
    path = "/api/v1/workspace/{workspace_id}/board",
    tag = BOARD_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board created", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not create boards", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CreateBoard(workspace_id)])
        .await?;

    let params = CreateBoardParams::from_dto(workspace_id, payload)?;
    let board = BoardService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(board.into_dto())))
}

/// Replace the name and background color of a board.
#[utoipa::path(
    put,
    path = "/api/v1/workspace/{workspace_id}/board/{board_id}",
    tag = BOARD_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Updated board", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace or board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, board_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let params = UpdateBoardParams::from_update_dto(board_id, payload)?;
    let board = BoardService::new(&state.db)
        .update(workspace_id, params)
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Update some fields of a board.
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}/board/{board_id}",
    tag = BOARD_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("board_id" = i32, Path, description = "Board ID")
    ),
    request_body = PatchBoardDto,
    responses(
        (status = 200, description = "Updated board", body = BoardDto),
        (status = 400, description = "Invalid board data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace or board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_board(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, board_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<PatchBoardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let params = UpdateBoardParams::from_patch_dto(board_id, payload)?;
    let board = BoardService::new(&state.db)
        .update(workspace_id, params)
        .await?;

    Ok((StatusCode::OK, Json(board.into_dto())))
}

/// Delete a board with its lists, cards and history.
///
/// # Access Control
/// - `DeleteBoard` - Admins, or members holding the board deletion right
#[utoipa::path(
    delete,
    path = "/api/v1/workspace/{workspace_id}/board/{board_id}",
    tag = BOARD_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("board_id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 204, description = "Board deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not delete boards", body = ErrorDto),
        (status = 404, description = "Workspace or board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, board_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::DeleteBoard(workspace_id)])
        .await?;

    BoardService::new(&state.db)
        .delete(workspace_id, board_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
