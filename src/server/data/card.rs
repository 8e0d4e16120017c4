//! Card repository.
//!
//! Cards are ordered inside their list by a dense 1-based `position`, with
//! `board_list.card_nb` holding the number of cards. Moves across lists renumber
//! both lists and update both counters in the same transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::card::{Card, CreateCardParams, UpdateCardParams},
    util::position::{
        append_position, plan_move, plan_removal, plan_transfer, PositionChange, Slot,
    },
};

pub struct CardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Card>, DbErr> {
        let entity = entity::prelude::Card::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Card::from_entity))
    }

    /// Gets the cards of a list ordered by position.
    pub async fn get_by_list(&self, list_id: i32) -> Result<Vec<Card>, DbErr> {
        let entities = entity::prelude::Card::find()
            .filter(entity::card::Column::ListId.eq(list_id))
            .order_by_asc(entity::card::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Card::from_entity).collect())
    }

    /// Appends a card at the end of its list.
    ///
    /// # Returns
    /// - `Ok(Card)` - Created card at position `card_nb + 1`
    /// - `Err(AppError::NotFound)` - List does not exist
    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await?;

        let list = entity::prelude::BoardList::find_by_id(params.list_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List {} not found", params.list_id)))?;

        let position = append_position(list.card_nb);

        let card = entity::card::ActiveModel {
            list_id: ActiveValue::Set(params.list_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            date_end: ActiveValue::Set(params.date_end),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        set_card_count(&txn, params.list_id, position).await?;

        txn.commit().await?;

        Ok(Card::from_entity(card))
    }

    /// Applies the provided fields of `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Card))` - The updated card
    /// - `Ok(None)` - No card with this ID
    pub async fn update(&self, params: UpdateCardParams) -> Result<Option<Card>, DbErr> {
        let Some(existing) = entity::prelude::Card::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::card::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(date_end) = params.date_end {
            active.date_end = ActiveValue::Set(Some(date_end));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Card::from_entity(entity)))
    }

    /// Moves a card to `position` in `target_list_id`.
    ///
    /// Within the same list the allowed range is `1..=card_nb`. Into another list it is
    /// `1..=card_nb + 1` of the target list. Moving a card onto its current position in
    /// its current list writes nothing.
    ///
    /// # Returns
    /// - `Ok(Some((Card, bool)))` - The card at its new place, and whether it moved
    /// - `Ok(None)` - No card with this ID
    /// - `Err(AppError::NotFound)` - Target list does not exist
    /// - `Err(AppError::PositionErr)` - `position` is out of range
    pub async fn move_to(
        &self,
        id: i32,
        target_list_id: i32,
        position: i32,
    ) -> Result<Option<(Card, bool)>, AppError> {
        let txn = self.db.begin().await?;

        let Some(card) = entity::prelude::Card::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let source_list_id = card.list_id;

        if source_list_id == target_list_id {
            let siblings = list_slots(&txn, source_list_id).await?;
            check_card_count(&txn, source_list_id, &siblings).await?;

            let changes = plan_move(&siblings, id, position)?;
            if changes.is_empty() {
                return Ok(Some((Card::from_entity(card), false)));
            }

            apply_changes(&txn, &changes).await?;
        } else {
            let source = list_slots(&txn, source_list_id).await?;
            check_card_count(&txn, source_list_id, &source).await?;
            let target = list_slots(&txn, target_list_id).await?;
            check_card_count(&txn, target_list_id, &target).await?;

            let plan = plan_transfer(&source, &target, id, position)?;

            entity::card::ActiveModel {
                id: ActiveValue::Unchanged(id),
                list_id: ActiveValue::Set(target_list_id),
                ..Default::default()
            }
            .update(&txn)
            .await?;

            apply_changes(&txn, &plan.source).await?;
            apply_changes(&txn, &plan.target).await?;
            set_card_count(&txn, source_list_id, plan.source_count).await?;
            set_card_count(&txn, target_list_id, plan.target_count).await?;
        }

        let moved = entity::prelude::Card::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Card {} not found after move", id)))?;

        txn.commit().await?;

        Ok(Some((Card::from_entity(moved), true)))
    }

    /// Deletes a card, closing the gap it leaves in its list.
    ///
    /// # Returns
    /// - `Ok(true)` - Card deleted and siblings renumbered
    /// - `Ok(false)` - No card with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(card) = entity::prelude::Card::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        let siblings = list_slots(&txn, card.list_id).await?;
        check_card_count(&txn, card.list_id, &siblings).await?;

        let changes = plan_removal(&siblings, id)?;

        entity::prelude::Card::delete_by_id(id).exec(&txn).await?;
        apply_changes(&txn, &changes).await?;
        set_card_count(&txn, card.list_id, siblings.len() as i32 - 1).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn list_slots<C: ConnectionTrait>(conn: &C, list_id: i32) -> Result<Vec<Slot>, DbErr> {
    let cards = entity::prelude::Card::find()
        .filter(entity::card::Column::ListId.eq(list_id))
        .all(conn)
        .await?;

    Ok(cards
        .into_iter()
        .map(|c| Slot::new(c.id, c.position))
        .collect())
}

async fn check_card_count<C: ConnectionTrait>(
    conn: &C,
    list_id: i32,
    siblings: &[Slot],
) -> Result<(), AppError> {
    let list = entity::prelude::BoardList::find_by_id(list_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("List {} not found", list_id)))?;

    if list.card_nb != siblings.len() as i32 {
        return Err(InternalError::CounterMismatch {
            container: "list",
            id: list_id,
            counter: list.card_nb,
            actual: siblings.len(),
        }
        .into());
    }

    Ok(())
}

async fn set_card_count<C: ConnectionTrait>(conn: &C, list_id: i32, count: i32) -> Result<(), DbErr> {
    entity::board_list::ActiveModel {
        id: ActiveValue::Unchanged(list_id),
        card_nb: ActiveValue::Set(count),
        ..Default::default()
    }
    .update(conn)
    .await?;

    Ok(())
}

async fn apply_changes<C: ConnectionTrait>(conn: &C, changes: &[PositionChange]) -> Result<(), DbErr> {
    for change in changes {
        entity::card::ActiveModel {
            id: ActiveValue::Unchanged(change.id),
            position: ActiveValue::Set(change.position),
            ..Default::default()
        }
        .update(conn)
        .await?;
    }

    Ok(())
}
