use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::workspace::WorkspaceRepository,
    error::AppError,
    model::workspace::{CreateWorkspaceParams, UpdateWorkspaceParams, Workspace},
};

pub struct WorkspaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkspaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Workspace, AppError> {
        WorkspaceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workspace {} not found", id)))
    }

    /// Gets the workspaces `user_id` is a member of.
    pub async fn get_by_member(&self, user_id: i32) -> Result<Vec<Workspace>, AppError> {
        Ok(WorkspaceRepository::new(self.db)
            .get_by_member(user_id)
            .await?)
    }

    pub async fn create(&self, params: CreateWorkspaceParams) -> Result<Workspace, AppError> {
        let workspace = WorkspaceRepository::new(self.db).create(params).await?;
        tracing::info!(
            "User {} created workspace {}",
            workspace.creator_id,
            workspace.id
        );

        Ok(workspace)
    }

    pub async fn update(&self, params: UpdateWorkspaceParams) -> Result<Workspace, AppError> {
        let id = params.id;
        WorkspaceRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workspace {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !WorkspaceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Workspace {} not found", id)));
        }

        tracing::info!("Deleted workspace {}", id);

        Ok(())
    }
}
