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
        assignee::{AssigneeDto, CreateAssigneeDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        service::assignee::AssigneeService,
        state::AppState,
    },
};

/// Tag for grouping assignee endpoints in OpenAPI documentation
pub static ASSIGNEE_TAG: &str = "assignee";

#[utoipa::path(
    get,
    path = "/api/v1/card/{card_id}/assignees",
    tag = ASSIGNEE_TAG,
    params(("card_id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Assignees of the card", body = Vec<AssigneeDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignees(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let assignees = AssigneeService::new(&state.db).get_by_card(card_id).await?;

    Ok((
        StatusCode::OK,
        Json(assignees.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Assign a workspace member to a card. The member receives a notification.
///
/// # Returns
/// - `201 Created` - The assignment
/// - `404 Not Found` - Card missing, or user not a member of the card's workspace
/// - `409 Conflict` - Already assigned
#[utoipa::path(
    post,
    path = "/api/v1/card/{card_id}/assignee",
    tag = ASSIGNEE_TAG,
    params(("card_id" = i32, Path, description = "Card ID")),
    request_body = CreateAssigneeDto,
    responses(
        (status = 201, description = "User assigned", body = AssigneeDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card or member not found", body = ErrorDto),
        (status = 409, description = "Already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_user(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateAssigneeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let assignee = AssigneeService::new(&state.db)
        .assign(card_id, payload.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(assignee.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/card/{card_id}/assignee/{user_id}",
    tag = ASSIGNEE_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        ("user_id" = i32, Path, description = "User ID of the assignee")
    ),
    responses(
        (status = 204, description = "User unassigned"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_user(
    State(state): State<AppState>,
    session: Session,
    Path((card_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    AssigneeService::new(&state.db)
        .unassign(card_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
