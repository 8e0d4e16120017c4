use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::board::{Board, CreateBoardParams, UpdateBoardParams};

pub struct BoardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty board with `list_nb = 0`.
    pub async fn create(&self, params: CreateBoardParams) -> Result<Board, DbErr> {
        let entity = entity::board::ActiveModel {
            workspace_id: ActiveValue::Set(params.workspace_id),
            name: ActiveValue::Set(params.name),
            background_color: ActiveValue::Set(params.background_color),
            list_nb: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Board::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Board>, DbErr> {
        let entity = entity::prelude::Board::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Board::from_entity))
    }

    pub async fn get_by_workspace(&self, workspace_id: i32) -> Result<Vec<Board>, DbErr> {
        let entities = entity::prelude::Board::find()
            .filter(entity::board::Column::WorkspaceId.eq(workspace_id))
            .order_by_asc(entity::board::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Board::from_entity).collect())
    }

    /// Applies the provided fields of `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Board))` - The updated board
    /// - `Ok(None)` - No board with this ID
    pub async fn update(&self, params: UpdateBoardParams) -> Result<Option<Board>, DbErr> {
        let Some(existing) = entity::prelude::Board::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(background_color) = params.background_color {
            active.background_color = ActiveValue::Set(background_color);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Board::from_entity(entity)))
    }

    /// Deletes a board with its lists, cards, labels, assignees and activities.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Board::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
