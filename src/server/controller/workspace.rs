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
        workspace::{CreateWorkspaceDto, PatchWorkspaceDto, UpdateWorkspaceDto, WorkspaceDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
            upload::ImageFile,
        },
        model::workspace::{CreateWorkspaceParams, UpdateWorkspaceParams},
        service::{image::ImageService, workspace::WorkspaceService},
        state::AppState,
    },
};

/// Tag for grouping workspace endpoints in OpenAPI documentation
pub static WORKSPACE_TAG: &str = "workspace";

/// Get a workspace.
///
/// # Access Control
/// - `WorkspaceMember` - Only members can view the workspace
#[utoipa::path(
    get,
    path = "/api/v1/workspace/{workspace_id}",
    tag = WORKSPACE_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    responses(
        (status = 200, description = "Workspace", body = WorkspaceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workspace(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceMember(workspace_id)])
        .await?;

    let workspace = WorkspaceService::new(&state.db).get(workspace_id).await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}

/// Get the workspaces the logged in user is a member of.
#[utoipa::path(
    get,
    path = "/api/v1/my_workspaces",
    tag = WORKSPACE_TAG,
    responses(
        (status = 200, description = "Workspaces of the user", body = Vec<WorkspaceDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_workspaces(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let workspaces = WorkspaceService::new(&state.db)
        .get_by_member(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            workspaces
                .into_iter()
                .map(|w| w.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a workspace.
///
/// The logged in user becomes its creator and a member holding every right.
#[utoipa::path(
    post,
    path = "/api/v1/workspace",
    tag = WORKSPACE_TAG,
    request_body = CreateWorkspaceDto,
    responses(
        (status = 201, description = "Workspace created", body = WorkspaceDto),
        (status = 400, description = "Invalid workspace data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_workspace(
    State(state): State<AppState>,
    session: Session,
    ApiJson(payload): ApiJson<CreateWorkspaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateWorkspaceParams::from_dto(user.id, payload)?;
    let workspace = WorkspaceService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(workspace.into_dto())))
}

/// Replace the name and description of a workspace.
///
/// # Access Control
/// - `WorkspaceAdmin` - Only admins can edit the workspace
#[utoipa::path(
    put,
    path = "/api/v1/workspace/{workspace_id}",
    tag = WORKSPACE_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    request_body = UpdateWorkspaceDto,
    responses(
        (status = 200, description = "Updated workspace", body = WorkspaceDto),
        (status = 400, description = "Invalid workspace data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_workspace(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateWorkspaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceAdmin(workspace_id)])
        .await?;

    let params = UpdateWorkspaceParams::from_update_dto(workspace_id, payload)?;
    let workspace = WorkspaceService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}

/// Update some fields of a workspace.
///
/// # Access Control
/// - `WorkspaceAdmin` - Only admins can edit the workspace
#[utoipa::path(
    patch,
    path = "/api/v1/workspace/{workspace_id}",
    tag = WORKSPACE_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    request_body = PatchWorkspaceDto,
    responses(
        (status = 200, description = "Updated workspace", body = WorkspaceDto),
        (status = 400, description = "Invalid workspace data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_workspace(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
    ApiJson(payload): ApiJson<PatchWorkspaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceAdmin(workspace_id)])
        .await?;

    let params = UpdateWorkspaceParams::from_patch_dto(workspace_id, payload)?;
    let workspace = WorkspaceService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}

/// Delete a workspace with its boards, members and invitations.
///
/// # Access Control
/// - `WorkspaceCreator` - Only the creator can delete the workspace
#[utoipa::path(
    delete,
    path = "/api/v1/workspace/{workspace_id}",
    tag = WORKSPACE_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    responses(
        (status = 204, description = "Workspace deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the creator", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_workspace(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceCreator(workspace_id)])
        .await?;

    WorkspaceService::new(&state.db).delete(workspace_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Upload the workspace favicon.
///
/// # Access Control
/// - `WorkspaceAdmin` - Only admins can change the favicon
#[utoipa::path(
    post,
    path = "/api/v1/workspace/{workspace_id}/favicon",
    tag = WORKSPACE_TAG,
    params(("workspace_id" = i32, Path, description = "Workspace ID")),
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Workspace with the new favicon URL", body = WorkspaceDto),
        (status = 400, description = "Missing or unsupported image", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workspace not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_favicon(
    State(state): State<AppState>,
    session: Session,
    Path(workspace_id): Path<i32>,
    ImageFile(image): ImageFile,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::WorkspaceAdmin(workspace_id)])
        .await?;

    let workspace = ImageService::new(&state.db, &state.image_store)
        .update_workspace_favicon(workspace_id, image)
        .await?;

    Ok((StatusCode::OK, Json(workspace.into_dto())))
}
