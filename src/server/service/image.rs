use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, workspace::WorkspaceRepository},
    error::AppError,
    model::{
        user::{UpdateUserParams, User},
        workspace::{UpdateWorkspaceParams, Workspace},
    },
    storage::{ImageKind, ImageStore, ImageUpload},
};

/// Uploads profile photos and workspace favicons and stores their URLs.
pub struct ImageService<'a, S> {
    db: &'a DatabaseConnection,
    store: &'a S,
}

impl<'a, S: ImageStore> ImageService<'a, S> {
    pub fn new(db: &'a DatabaseConnection, store: &'a S) -> Self {
        Self { db, store }
    }

    /// Replaces the user's avatar with an uploaded image.
    ///
    /// The previous image is deleted from the store afterwards. Failing to delete it
    /// is logged and does not fail the request.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new `avatar_url`
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn update_profile_photo(
        &self,
        user_id: i32,
        image: ImageUpload,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let key = image.object_key(&format!("user-{}", user.id));
        let url = self.store.upload(ImageKind::Avatar, &key, &image).await?;

        let updated = user_repo
            .update(UpdateUserParams {
                id: user.id,
                avatar_url: Some(url),
                ..Default::default()
            })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if let Some(previous) = user.avatar_url {
            self.discard(ImageKind::Avatar, &previous).await;
        }

        tracing::info!("User {} uploaded a profile photo", user.id);

        Ok(updated)
    }

    /// Replaces the workspace favicon with an uploaded image.
    ///
    /// # Returns
    /// - `Ok(Workspace)` - Workspace with the new `favicon_url`
    /// - `Err(AppError::NotFound)` - Workspace does not exist
    pub async fn update_workspace_favicon(
        &self,
        workspace_id: i32,
        image: ImageUpload,
    ) -> Result<Workspace, AppError> {
        let workspace_repo = WorkspaceRepository::new(self.db);
        let workspace = workspace_repo
            .find_by_id(workspace_id)
            .await?
            .ok_or_else(|| workspace_not_found(workspace_id))?;

        let key = image.object_key(&format!("workspace-{}", workspace.id));
        let url = self
            .store
            .upload(ImageKind::WorkspaceFavicon, &key, &image)
            .await?;

        let updated = workspace_repo
            .update(UpdateWorkspaceParams {
                id: workspace.id,
                favicon_url: Some(url),
                ..Default::default()
            })
            .await?
            .ok_or_else(|| workspace_not_found(workspace_id))?;

        if let Some(previous) = workspace.favicon_url {
            self.discard(ImageKind::WorkspaceFavicon, &previous).await;
        }

        Ok(updated)
    }

    async fn discard(&self, kind: ImageKind, url: &str) {
        if let Err(e) = self.store.remove(kind, url).await {
            tracing::warn!("Failed to delete replaced image {}: {}", url, e);
        }
    }
}

fn workspace_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Workspace {} not found", id))
}
