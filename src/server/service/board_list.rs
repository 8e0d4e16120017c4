use sea_orm::DatabaseConnection;

use crate::server::{
    data::{activity::ActivityRepository, board_list::BoardListRepository},
    error::AppError,
    model::board_list::BoardList,
};

/// Board lists, with an activity entry recorded for every change.
pub struct BoardListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<BoardList>, AppError> {
        Ok(BoardListRepository::new(self.db)
            .get_by_board(board_id)
            .await?)
    }

    /// Gets a list of `board_id`. Lists of other boards are reported missing.
    pub async fn get(&self, board_id: i32, id: i32) -> Result<BoardList, AppError> {
        BoardListRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|l| l.board_id == board_id)
            .ok_or_else(|| list_not_found(id))
    }

    pub async fn create(&self, board_id: i32, name: String) -> Result<BoardList, AppError> {
        let list = BoardListRepository::new(self.db)
            .create(board_id, name)
            .await?;

        self.record(list.board_id, format!("List \"{}\" created", list.name))
            .await?;

        Ok(list)
    }

    pub async fn rename(&self, id: i32, name: String) -> Result<BoardList, AppError> {
        let list = BoardListRepository::new(self.db)
            .rename(id, name)
            .await?
            .ok_or_else(|| list_not_found(id))?;

        self.record(list.board_id, format!("List renamed to \"{}\"", list.name))
            .await?;

        Ok(list)
    }

    /// Moves a list to `position` within its board. An activity entry is only
    /// recorded when the list actually moved.
    ///
    /// # Returns
    /// - `Ok(BoardList)` - The list at its new position
    /// - `Err(AppError::PositionErr)` - Position outside `1..=list_nb`, mapped to 403
    pub async fn move_to(&self, id: i32, position: i32) -> Result<BoardList, AppError> {
        let (list, moved) = BoardListRepository::new(self.db)
            .move_to(id, position)
            .await?
            .ok_or_else(|| list_not_found(id))?;

        if moved {
            self.record(
                list.board_id,
                format!("List \"{}\" moved to position {}", list.name, list.position),
            )
            .await?;
        }

        Ok(list)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let list_repo = BoardListRepository::new(self.db);

        let list = list_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| list_not_found(id))?;

        if !list_repo.delete(id).await? {
            return Err(list_not_found(id));
        }

        self.record(list.board_id, format!("List \"{}\" deleted", list.name))
            .await?;

        Ok(())
    }

    async fn record(&self, board_id: i32, message: String) -> Result<(), AppError> {
        ActivityRepository::new(self.db)
            .create(board_id, message)
            .await?;
        Ok(())
    }
}

fn list_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("List {} not found", id))
}
