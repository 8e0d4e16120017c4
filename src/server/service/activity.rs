use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity::ActivityRepository, error::AppError, model::activity::Activity,
    util::validate::require_non_blank,
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Activity>, AppError> {
        Ok(ActivityRepository::new(self.db)
            .get_by_board(board_id)
            .await?)
    }

    pub async fn create(&self, board_id: i32, message: String) -> Result<Activity, AppError> {
        let message = require_non_blank("message", message)?;
        Ok(ActivityRepository::new(self.db)
            .create(board_id, message)
            .await?)
    }

    /// Deletes an entry of `board_id`. Entries of other boards are reported missing.
    pub async fn delete(&self, board_id: i32, id: i32) -> Result<(), AppError> {
        let activity_repo = ActivityRepository::new(self.db);

        activity_repo
            .find_by_id(id)
            .await?
            .filter(|a| a.board_id == board_id)
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

        activity_repo.delete(id).await?;

        Ok(())
    }

    pub async fn clear(&self, board_id: i32) -> Result<(), AppError> {
        ActivityRepository::new(self.db)
            .delete_by_board(board_id)
            .await?;
        Ok(())
    }
}
