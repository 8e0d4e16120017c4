use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::label::{CreateLabelParams, Label, UpdateLabelParams};

pub struct LabelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LabelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLabelParams) -> Result<Label, DbErr> {
        let entity = entity::card_label::ActiveModel {
            card_id: ActiveValue::Set(params.card_id),
            title: ActiveValue::Set(params.title),
            color: ActiveValue::Set(params.color),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Label::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Label>, DbErr> {
        let entity = entity::prelude::CardLabel::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Label::from_entity))
    }

    pub async fn get_by_card(&self, card_id: i32) -> Result<Vec<Label>, DbErr> {
        let entities = entity::prelude::CardLabel::find()
            .filter(entity::card_label::Column::CardId.eq(card_id))
            .order_by_asc(entity::card_label::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Label::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateLabelParams) -> Result<Option<Label>, DbErr> {
        let Some(existing) = entity::prelude::CardLabel::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::card_label::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(color) = params.color {
            active.color = ActiveValue::Set(color);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Label::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CardLabel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
