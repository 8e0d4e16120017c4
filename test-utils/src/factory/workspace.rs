//! Workspace factory.
//!
//! A workspace is always created together with the creator's membership row holding
//! every right, matching what the server does on workspace creation.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct WorkspaceFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    name: String,
    description: String,
}

impl<'a> WorkspaceFactory<'a> {
    /// Creates a new WorkspaceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Workspace {id}"`
    /// - description: empty
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            name: format!("Workspace {}", id),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Inserts the workspace and the creator's membership.
    ///
    /// # Returns
    /// - `Ok(entity::workspace::Model)` - Created workspace
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::workspace::Model, DbErr> {
        let workspace = entity::workspace::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            favicon_url: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        crate::factory::member::MemberFactory::new(self.db, workspace.id, self.creator_id)
            .all_rights()
            .build()
            .await?;

        Ok(workspace)
    }
}

/// Creates a workspace owned by `creator_id` with default values.
pub async fn create_workspace(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::workspace::Model, DbErr> {
    WorkspaceFactory::new(db, creator_id).build().await
}
