use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, invitation::InvitationDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::invitation::InvitationService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

/// Invite a registered user to a workspace by email.
///
/// The invitee receives a notification.
///
/// # Access Control
/// - `Invite` - Admins, or members holding the invitation right
///
/// # Returns
/// - `201 Created` - The pending invitation
/// - `404 Not Found` - No account uses the email
/// - `409 Conflict` - Already a member or already invited
#[utoipa::path(
    post,
    path = "/api/v1/workspace/{workspace_id}/send_invitation/{email}",
    tag = INVITATION_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("email" = String, Path, description = "Email of the invitee")
    ),
    responses(
        (status = 201, description = "Invitation sent", body = InvitationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not invite", body = ErrorDto),
        (status = 404, description = "Workspace or user not found", body = ErrorDto),
        (status = 409, description = "Already a member or invited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_invitation(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, email)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Invite(workspace_id)])
        .await?;

    let invitation = InvitationService::new(&state.db)
        .send(workspace_id, email)
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// Get the pending invitations of the logged in user.
#[utoipa::path(
    get,
    path = "/api/v1/my_invitations",
    tag = INVITATION_TAG,
    responses(
        (status = 200, description = "Invitations of the user", body = Vec<InvitationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_invitations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invitations = InvitationService::new(&state.db)
        .get_by_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(invitations.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get the pending invitations of a workspace.
#[utoipa::path(
    get,
    path = "/api/v1/workspace/{workspace_id}/invitations",
    tag = INVITATION_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    responses(
        (status = 200, description = "Invitations of the workspace", body = Vec<InvitationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workspace_invitations(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let invitations = InvitationService::new(&state.db)
        .get_by_workspace(workspace_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(invitations.into_iter().map(|i| i.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Accept an invitation, joining its workspace without any right.
#[utoipa::path(
    post,
    path = "/api/v1/accept_invitation/{invitation_id}",
    tag = INVITATION_TAG,
    params(("invitation_id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 204, description = "Invitation accepted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    InvitationService::new(&state.db)
        .accept(invitation_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Decline an invitation of the logged in user.
#[utoipa::path(
    delete,
    path = "/api/v1/delete_invitation/{invitation_id}",
    tag = INVITATION_TAG,
    params(("invitation_id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 204, description = "Invitation declined"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    InvitationService::new(&state.db)
        .decline(invitation_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Cancel a pending invitation of a workspace.
///
/// # Access Control
/// - `Invite` - Admins, or members holding the invitation right
#[utoipa::path(
    delete,
    path = "/api/v1/workspace/{workspace_id}/delete_invitation/{invitation_id}",
    tag = INVITATION_TAG,
    params(
        ("workspace_id" = i32, Path, description = "Workspace ID"),
        ("invitation_id" = i32, Path, description = "Invitation ID")
    ),
    responses(
        (status = 204, description = "Invitation cancelled"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not invite", body = ErrorDto),
        (status = 404, description = "Workspace or invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_invitation(
    State(state): State<AppState>,
    session: Session,
    Path((workspace_id, invitation_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Invite(workspace_id)])
        .await?;

    InvitationService::new(&state.db)
        .cancel(workspace_id, invitation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
