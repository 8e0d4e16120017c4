use chrono::{DateTime, Utc};

use crate::model::activity::ActivityDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub board_id: i32,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn from_entity(entity: entity::board_activity::Model) -> Self {
        Self {
            id: entity.id,
            board_id: entity.board_id,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            board_id: self.board_id,
            message: self.message,
            created_at: self.created_at,
        }
    }
}
