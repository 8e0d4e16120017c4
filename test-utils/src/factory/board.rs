//! Board factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BoardFactory<'a> {
    db: &'a DatabaseConnection,
    workspace_id: i32,
    name: String,
    background_color: String,
}

impl<'a> BoardFactory<'a> {
    /// Creates a new BoardFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Board {id}"`
    /// - background_color: `"#0079bf"`
    pub fn new(db: &'a DatabaseConnection, workspace_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            workspace_id,
            name: format!("Board {}", id),
            background_color: "#0079bf".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Inserts an empty board with `list_nb = 0`.
    pub async fn build(self) -> Result<entity::board::Model, DbErr> {
        entity::board::ActiveModel {
            workspace_id: ActiveValue::Set(self.workspace_id),
            name: ActiveValue::Set(self.name),
            background_color: ActiveValue::Set(self.background_color),
            list_nb: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_board(
    db: &DatabaseConnection,
    workspace_id: i32,
) -> Result<entity::board::Model, DbErr> {
    BoardFactory::new(db, workspace_id).build().await
}
