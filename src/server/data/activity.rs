use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::activity::Activity;

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an entry to the board's history.
    pub async fn create(&self, board_id: i32, message: String) -> Result<Activity, DbErr> {
        let entity = entity::board_activity::ActiveModel {
            board_id: ActiveValue::Set(board_id),
            message: ActiveValue::Set(message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::BoardActivity::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Gets the history of a board, newest first.
    pub async fn get_by_board(&self, board_id: i32) -> Result<Vec<Activity>, DbErr> {
        let entities = entity::prelude::BoardActivity::find()
            .filter(entity::board_activity::Column::BoardId.eq(board_id))
            .order_by_desc(entity::board_activity::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BoardActivity::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears the whole history of a board, returning how many entries were removed.
    pub async fn delete_by_board(&self, board_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BoardActivity::delete_many()
            .filter(entity::board_activity::Column::BoardId.eq(board_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
