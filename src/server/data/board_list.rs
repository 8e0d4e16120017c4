//! Board list repository.
//!
//! Lists are ordered inside their board by a dense 1-based `position`, with
//! `board.list_nb` holding the number of lists. Every operation changing positions
//! loads the board's lists, plans the renumbering with `util::position` and writes
//! the plan together with the new counter in one transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::board_list::BoardList,
    util::position::{append_position, plan_move, plan_removal, PositionChange, Slot},
};

pub struct BoardListRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardListRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BoardList>, DbErr> {
        let entity = entity::prelude::BoardList::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BoardList::from_entity))
    }

    /// Gets the lists of a board ordered by position.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<BoardList>, DbErr> {
        let entities = entity::prelude::BoardList::find()
            .filter(entity::board_list::Column::BoardId.eq(board_id))
            .order_by_asc(entity::board_list::Column::Position)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BoardList::from_entity).collect())
    }

    /// Appends a list at the end of the board.
    ///
    /// # Returns
    /// - `Ok(BoardList)` - Created list at position `list_nb + 1`
    /// - `Err(AppError::NotFound)` - Board does not exist
    pub async fn create(&self, board_id: i32, name: String) -> Result<BoardList, AppError> {
        let txn = self.db.begin().await?;

        let board = entity::prelude::Board::find_by_id(board_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;

        let position = append_position(board.list_nb);

        let list = entity::board_list::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            name: ActiveValue::Set(name),
            position: ActiveValue::Set(position),
            card_nb: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        set_list_count(&txn, board_id, position).await?;

        txn.commit().await?;

        Ok(BoardList::from_entity(list))
    }

    pub async fn rename(&self, id: i32, name: String) -> Result<Option<BoardList>, DbErr> {
        let Some(existing) = entity::prelude::BoardList::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board_list::ActiveModel = existing.into();
        active.name = ActiveValue::Set(name);
        let entity = active.update(self.db).await?;

        Ok(Some(BoardList::from_entity(entity)))
    }

    /// Moves a list to `position` within its board.
    ///
    /// Moving a list onto its current position writes nothing.
    ///
    /// # Returns
    /// - `Ok(Some((BoardList, bool)))` - The list at its new position, and whether any
    ///   position changed
    /// - `Ok(None)` - No list with this ID
    /// - `Err(AppError::PositionErr)` - `position` is outside `1..=list_nb`
    pub async fn move_to(
        &self,
        id: i32,
        position: i32,
    ) -> Result<Option<(BoardList, bool)>, AppError> {
        let txn = self.db.begin().await?;

        let Some(list) = entity::prelude::BoardList::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let siblings = board_slots(&txn, list.board_id).await?;
        check_list_count(&txn, list.board_id, &siblings).await?;

        let changes = plan_move(&siblings, id, position)?;
        if changes.is_empty() {
            return Ok(Some((BoardList::from_entity(list), false)));
        }

        apply_changes(&txn, &changes).await?;

        let moved = entity::prelude::BoardList::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("List {} not found after move", id)))?;

        txn.commit().await?;

        Ok(Some((BoardList::from_entity(moved), true)))
    }

    /// Deletes a list and its cards, closing the gap it leaves in the board.
    ///
    /// # Returns
    /// - `Ok(true)` - List deleted and siblings renumbered
    /// - `Ok(false)` - No list with this ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(list) = entity::prelude::BoardList::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        let siblings = board_slots(&txn, list.board_id).await?;
        check_list_count(&txn, list.board_id, &siblings).await?;

        let changes = plan_removal(&siblings, id)?;

        entity::prelude::BoardList::delete_by_id(id)
            .exec(&txn)
            .await?;
        apply_changes(&txn, &changes).await?;
        set_list_count(&txn, list.board_id, siblings.len() as i32 - 1).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn board_slots<C: ConnectionTrait>(conn: &C, board_id: i32) -> Result<Vec<Slot>, DbErr> {
    let lists = entity::prelude::BoardList::find()
        .filter(entity::board_list::Column::BoardId.eq(board_id))
        .all(conn)
        .await?;

    Ok(lists
        .into_iter()
        .map(|l| Slot::new(l.id, l.position))
        .collect())
}

async fn check_list_count<C: ConnectionTrait>(
    conn: &C,
    board_id: i32,
    siblings: &[Slot],
) -> Result<(), AppError> {
    let board = entity::prelude::Board::find_by_id(board_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Board {} not found", board_id)))?;

    if board.list_nb != siblings.len() as i32 {
        return Err(InternalError::CounterMismatch {
            container: "board",
            id: board_id,
            counter: board.list_nb,
            actual: siblings.len(),
        }
        .into());
    }

    Ok(())
}

async fn set_list_count<C: ConnectionTrait>(conn: &C, board_id: i32, count: i32) -> Result<(), DbErr> {
    entity::board::ActiveModel {
        id: ActiveValue::Unchanged(board_id),
        list_nb: ActiveValue::Set(count),
        ..Default::default()
    }
    .update(conn)
    .await?;

    Ok(())
}

async fn apply_changes<C: ConnectionTrait>(conn: &C, changes: &[PositionChange]) -> Result<(), DbErr> {
    for change in changes {
        entity::board_list::ActiveModel {
            id: ActiveValue::Unchanged(change.id),
            position: ActiveValue::Set(change.position),
            ..Default::default()
        }
        .update(conn)
        .await?;
    }

    Ok(())
}
