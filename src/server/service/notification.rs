use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::Notification,
    util::validate::require_non_blank,
};

/// Notifications of a single user. Notifications of other users are reported missing.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Sends a notification to `user_id`.
    pub async fn send(&self, user_id: i32, message: String) -> Result<Notification, AppError> {
        let message = require_non_blank("message", message)?;

        if UserRepository::new(self.db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(NotificationRepository::new(self.db)
            .create(user_id, message)
            .await?)
    }

    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        self.get_own(id, user_id).await?;

        NotificationRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(|| notification_not_found(id))
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        self.get_own(id, user_id).await?;
        NotificationRepository::new(self.db).delete(id).await?;
        Ok(())
    }

    pub async fn delete_all(&self, user_id: i32) -> Result<(), AppError> {
        NotificationRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;
        Ok(())
    }

    async fn get_own(&self, id: i32, user_id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or_else(|| notification_not_found(id))
    }
}

fn notification_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Notification {} not found", id))
}
