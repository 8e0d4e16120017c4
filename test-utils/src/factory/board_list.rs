//! Board list factory.
//!
//! Lists are appended after the board's last list and the board's `list_nb` is bumped,
//! keeping positions dense.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

pub struct ListFactory<'a> {
    db: &'a DatabaseConnection,
    board_id: i32,
    name: String,
}

impl<'a> ListFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, board_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            board_id,
            name: format!("List {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Inserts the list at position `list_nb + 1` and increments the board counter.
    ///
    /// # Returns
    /// - `Ok(entity::board_list::Model)` - Created list
    /// - `Err(DbErr::RecordNotFound)` - Board does not exist
    pub async fn build(self) -> Result<entity::board_list::Model, DbErr> {
        let board = entity::prelude::Board::find_by_id(self.board_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Board {} not found",
                self.board_id
            )))?;

        let position = board.list_nb + 1;

        let list = entity::board_list::ActiveModel {
            board_id: ActiveValue::Set(self.board_id),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(position),
            card_nb: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut board = board.into_active_model();
        board.list_nb = ActiveValue::Set(position);
        board.update(self.db).await?;

        Ok(list)
    }
}

pub async fn create_list(
    db: &DatabaseConnection,
    board_id: i32,
) -> Result<entity::board_list::Model, DbErr> {
    ListFactory::new(db, board_id).build().await
}
