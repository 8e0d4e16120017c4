use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::board::BoardRepository,
    error::AppError,
    model::board::{Board, CreateBoardParams, UpdateBoardParams},
};

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Board>, AppError> {
        Ok(BoardRepository::new(self.db)
            .get_by_workspace(workspace_id)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Board, AppError> {
        BoardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| board_not_found(id))
    }

    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, AppError> {
        let board = BoardRepository::new(self.db).create(params).await?;
        tracing::debug!("Created board {} in workspace {}", board.id, board.workspace_id);

        Ok(board)
    }

    /// Updates a board of `workspace_id`. Boards of other workspaces are reported missing.
    pub async fn update(
        &self,
        workspace_id: i32,
        params: UpdateBoardParams,
    ) -> Result<Board, AppError> {
        let id = params.id;
        self.get_in_workspace(workspace_id, id).await?;

        BoardRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| board_not_found(id))
    }

    pub async fn delete(&self, workspace_id: i32, id: i32) -> Result<(), AppError> {
        self.get_in_workspace(workspace_id, id).await?;

        if !BoardRepository::new(self.db).delete(id).await? {
            return Err(board_not_found(id));
        }

        tracing::debug!("Deleted board {} of workspace {}", id, workspace_id);

        Ok(())
    }

    async fn get_in_workspace(&self, workspace_id: i32, id: i32) -> Result<Board, AppError> {
        let board = self.get(id).await?;
        if board.workspace_id != workspace_id {
            return Err(board_not_found(id));
        }

        Ok(board)
    }
}

fn board_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Board {} not found", id))
}
