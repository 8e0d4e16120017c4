use sea_orm::DatabaseConnection;

use crate::server::{
    data::label::LabelRepository,
    error::AppError,
    model::label::{CreateLabelParams, Label, UpdateLabelParams},
};

pub struct LabelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LabelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_card(&self, card_id: i32) -> Result<Vec<Label>, AppError> {
        Ok(LabelRepository::new(self.db).get_by_card(card_id).await?)
    }

    pub async fn create(&self, params: CreateLabelParams) -> Result<Label, AppError> {
        Ok(LabelRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, card_id: i32, params: UpdateLabelParams) -> Result<Label, AppError> {
        let id = params.id;
        self.get(card_id, id).await?;

        LabelRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| label_not_found(id))
    }

    pub async fn delete(&self, card_id: i32, id: i32) -> Result<(), AppError> {
        self.get(card_id, id).await?;
        LabelRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Labels of other cards are reported missing.
    async fn get(&self, card_id: i32, id: i32) -> Result<Label, AppError> {
        LabelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|l| l.card_id == card_id)
            .ok_or_else(|| label_not_found(id))
    }
}

fn label_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Label {} not found", id))
}
