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
        card::{CardDto, CreateCardDto, MoveCardDto, PatchCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::ApiJson,
        },
        model::card::{CreateCardParams, UpdateCardParams},
        service::card::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Get the cards of a list ordered by position.
#[utoipa::path(
    get,
    path = "/api/v1/list/{list_id}/cards",
    tag = CARD_TAG,
    params(("list_id" = i32, Path, description = "List ID")),
    responses(
        (status = 200, description = "Cards of the list", body = Vec<CardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cards(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let cards = CardService::new(&state.db).get_by_list(list_id).await?;

    Ok((
        StatusCode::OK,
        Json(cards.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/list/{list_id}/card/{card_id}",
    tag = CARD_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card", body = CardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List or card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    session: Session,
    Path((list_id, card_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let card = CardService::new(&state.db).get(list_id, card_id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Append a card at the end of a list.
#[utoipa::path(
    post,
    path = "/api/v1/list/{list_id}/card",
    tag = CARD_TAG,
    params(("list_id" = i32, Path, description = "List ID")),
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    session: Session,
    Path(list_id): Path<i32>,
    ApiJson(payload): ApiJson<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let params = CreateCardParams::from_dto(list_id, payload)?;
    let card = CardService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/list/{list_id}/card/{card_id}",
    tag = CARD_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Updated card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List or card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    session: Session,
    Path((list_id, card_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let params = UpdateCardParams::from_update_dto(card_id, payload)?;
    let card = CardService::new(&state.db).update(list_id, params).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/list/{list_id}/card/{card_id}",
    tag = CARD_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = PatchCardDto,
    responses(
        (status = 200, description = "Updated card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List or card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_card(
    State(state): State<AppState>,
    session: Session,
    Path((list_id, card_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<PatchCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let params = UpdateCardParams::from_patch_dto(card_id, payload)?;
    let card = CardService::new(&state.db).update(list_id, params).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Move a card within its list or to another list of the same board.
///
/// Within a list the cards between both positions shift by one. Across lists the
/// source closes the gap and the target makes room, so both keep positions `1..=N`.
///
/// # Returns
/// - `200 OK` - The card at its new place
/// - `400 Bad Request` - Target list belongs to another board
/// - `403 Forbidden` - Position out of range, or user is not a member
/// - `404 Not Found` - Card or target list not found
#[utoipa::path(
    patch,
    path = "/api/v1/list/{list_id}/card/{card_id}/position",
    tag = CARD_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    request_body = MoveCardDto,
    responses(
        (status = 200, description = "Card moved", body = CardDto),
        (status = 400, description = "Target list on another board", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Position out of range or user is not a member", body = ErrorDto),
        (status = 404, description = "Card or list not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_card(
    State(state): State<AppState>,
    session: Session,
    Path((list_id, card_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<MoveCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    let card = CardService::new(&state.db)
        .move_to(list_id, card_id, payload.new_list_id, payload.position)
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card. Following cards of the list move up by one.
#[utoipa::path(
    delete,
    path = "/api/v1/list/{list_id}/card/{card_id}",
    tag = CARD_TAG,
    params(
        ("list_id" = i32, Path, description = "List ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a member", body = ErrorDto),
        (status = 404, description = "List or card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    session: Session,
    Path((list_id, card_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ListMember(list_id)])
        .await?;

    CardService::new(&state.db).delete(list_id, card_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
