use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::MemberDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::member::MemberRight,
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Get the members of a workspace.
#[utoipa::path(
    get,
    path = "/api/v1/workspace/{workspace_id}/members",
    tag = MEMBER_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    responses(
        (status = 200, description = "Members of the workspace", body = Vec<MemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let members = MemberService::new(&state.db)
        .get_by_workspace(workspace_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(members.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one member of a workspace.
#[utoipa::path(
    get,
    path = "/api/v1/workspace/{workspace_id}/member/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 200, description = "Member", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let member = MemberService::new(&state.db)
        .get(workspace_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Toggle the admin right of a member.
///
/// # Access Control
/// - `WorkspaceAdmin` - Only admins can change rights
///
/// # Returns
/// - `200 OK` - Member with the right flipped
/// - `403 Forbidden` - Not an admin, or removing the creator's admin right
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}/member_admin/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 200, description = "Right toggled", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to change the right", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_admin(
    state: State<AppState>,
    session: Session,
    path: Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    toggle_right(state, session, path, MemberRight::Admin).await
}

/// Toggle the board creation right of a member.
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}/member_board_creation/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 200, description = "Right toggled", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_board_creation(
    state: State<AppState>,
    session: Session,
    path: Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    toggle_right(state, session, path, MemberRight::CreateBoard).await
}

/// Toggle the board deletion right of a member.
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}/member_board_deletion/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 200, description = "Right toggled", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_board_deletion(
    state: State<AppState>,
    session: Session,
    path: Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    toggle_right(state, session, path, MemberRight::DeleteBoard).await
}

/// Toggle the invitation right of a member.
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}/member_invitation/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 200, description = "Right toggled", body = MemberDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_invitation(
    state: State<AppState>,
    session: Session,
    path: Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    toggle_right(state, session, path, MemberRight::Invite).await
}

async fn toggle_right(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, user_id)): Path<(i32, i32)>,
    right: MemberRight,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceAdmin(workspace_id)])
        .await?;

    let member = MemberService::new(&state.db)
        .toggle_right(workspace_id, user_id, right)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Remove a member from a workspace.
///
/// # Access Control
/// - `WorkspaceMember` - Members may remove themselves, admins may remove anyone but the
///   creator
#[utoipa::path(
    delete,
    path = "/api/v1/workspace/{workspace_id}/delete_member/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("user_id" = i32, Path, description = "User ID of the member")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove the member", body = ErrorDto),
        (status = 404, description = "Workspace or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    MemberService::new(&state.db)
        .remove(workspace_id, user_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
