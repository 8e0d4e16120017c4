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
        label::{CreateLabelDto, LabelDto, PatchLabelDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        model::label::{CreateLabelParams, UpdateLabelParams},
        service::label::LabelService,
        state::AppState,
    },
};

/// Tag for grouping label endpoints in OpenAPI documentation
pub static LABEL_TAG: &str = "label";

#[utoipa::path(
    get,
    path = "/api/v1/card/{card_id}/labels",
    tag = LABEL_TAG,
    params(("card_id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Labels of the card", body = Vec<LabelDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_labels(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let labels = LabelService::new(&state.db).get_by_card(card_id).await?;

    Ok((
        StatusCode::OK,
        Json(labels.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/card/{card_id}/label",
    tag = LABEL_TAG,
    params(("card_id" = i32, Path, description = "Card ID")),
    request_body = CreateLabelDto,
    responses(
        (status = 201, description = "Label created", body = LabelDto),
        (status = 400, description = "Blank title or color", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_label(
    State(state): State<AppState>,
    session: Session,
    Path(card_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateLabelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let params = CreateLabelParams::from_dto(card_id, payload)?;
    let label = LabelService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(label.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/card/{card_id}/label/{label_id}",
    tag = LABEL_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        ("label_id" = i32, Path, description = "Label ID")
    ),
    request_body = CreateLabelDto,
    responses(
        (status = 200, description = "Updated label", body = LabelDto),
        (status = 400, description = "Blank title or color", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card or label not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_label(
    State(state): State<AppState>,
    session: Session,
    Path((card_id, label_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<CreateLabelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let params = UpdateLabelParams::from_update_dto(label_id, payload)?;
    let label = LabelService::new(&state.db).update(card_id, params).await?;

    Ok((StatusCode::OK, Json(label.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/card/{card_id}/label/{label_id}",
    tag = LABEL_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        ("label_id" = i32, Path, description = "Label ID")
    ),
    request_body = PatchLabelDto,
    responses(
        (status = 200, description = "Updated label", body = LabelDto),
        (status = 400, description = "Blank title or color", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card or label not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_label(
    State(state): State<AppState>,
    session: Session,
    Path((card_id, label_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<PatchLabelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    let params = UpdateLabelParams::from_patch_dto(label_id, payload)?;
    let label = LabelService::new(&state.db).update(card_id, params).await?;

    Ok((StatusCode::OK, Json(label.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/card/{card_id}/label/{label_id}",
    tag = LABEL_TAG,
    params(
        ("card_id" = i32, Path, description = "Card ID"),
        ("label_id" = i32, Path, description = "Label ID")
    ),
    responses(
        (status = 204, description = "Label deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "Card or label not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_label(
    State(state): State<AppState>,
    session: Session,
    Path((card_id, label_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CardMember(card_id)])
        .await?;

    LabelService::new(&state.db).delete(card_id, label_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
