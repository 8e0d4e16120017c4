//! Card factory.
//!
//! Cards are appended after the list's last card and the list's `card_nb` is bumped,
//! keeping positions dense.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    list_id: i32,
    name: String,
    description: String,
}

impl<'a> CardFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, list_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            list_id,
            name: format!("Card {}", id),
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

    /// Inserts the card at position `card_nb + 1` and increments the list counter.
    ///
    /// # Returns
    /// - `Ok(entity::card::Model)` - Created card
    /// - `Err(DbErr::RecordNotFound)` - List does not exist
    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let list = entity::prelude::BoardList::find_by_id(self.list_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "List {} not found",
                self.list_id
            )))?;

        let position = list.card_nb + 1;

        let card = entity::card::ActiveModel {
            list_id: ActiveValue::Set(self.list_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            date_end: ActiveValue::Set(None),
            position: ActiveValue::Set(position),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut list = list.into_active_model();
        list.card_nb = ActiveValue::Set(position);
        list.update(self.db).await?;

        Ok(card)
    }
}

pub async fn create_card(
    db: &DatabaseConnection,
    list_id: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, list_id).build().await
}
