use sea_orm::DatabaseConnection;

use crate::server::{
    data::{activity::ActivityRepository, board_list::BoardListRepository, card::CardRepository},
    error::AppError,
    model::{
        board_list::BoardList,
        card::{Card, CreateCardParams, UpdateCardParams},
    },
};

/// Cards of a list, with an activity entry recorded on the board for every change.
pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_list(&self, list_id: i32) -> Result<Vec<Card>, AppError> {
        Ok(CardRepository::new(self.db).get_by_list(list_id).await?)
    }

    /// Gets a card of `list_id`. Cards of other lists are reported missing.
    pub async fn get(&self, list_id: i32, id: i32) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .find_by_id(id)
            .await?
            .filter(|c| c.list_id == list_id)
            .ok_or_else(|| card_not_found(id))
    }

    pub async fn create(&self, params: CreateCardParams) -> Result<Card, AppError> {
        let list = self.list(params.list_id).await?;
        let card = CardRepository::new(self.db).create(params).await?;

        self.record(
            list.board_id,
            format!("Card \"{}\" added to list \"{}\"", card.name, list.name),
        )
        .await?;

        Ok(card)
    }

    pub async fn update(&self, list_id: i32, params: UpdateCardParams) -> Result<Card, AppError> {
        let id = params.id;
        self.get(list_id, id).await?;
        let list = self.list(list_id).await?;

        let card = CardRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| card_not_found(id))?;

        self.record(list.board_id, format!("Card \"{}\" updated", card.name))
            .await?;

        Ok(card)
    }

    /// Moves a card of `list_id` to `position` in `target_list_id`.
    ///
    /// # Returns
    /// - `Ok(Card)` - The card at its new place
    /// - `Err(AppError::NotFound)` - Card not in `list_id`, or target list missing
    /// - `Err(AppError::BadRequest)` - Target list belongs to another board
    /// - `Err(AppError::PositionErr)` - Position out of range, mapped to 403
    pub async fn move_to(
        &self,
        list_id: i32,
        id: i32,
        target_list_id: i32,
        position: i32,
    ) -> Result<Card, AppError> {
        self.get(list_id, id).await?;
        let source = self.list(list_id).await?;
        let target = if target_list_id == list_id {
            source.clone()
        } else {
            self.list(target_list_id).await?
        };

        if target.board_id != source.board_id {
            return Err(AppError::BadRequest(format!(
                "List {} belongs to another board",
                target_list_id
            )));
        }

        let (card, moved) = CardRepository::new(self.db)
            .move_to(id, target_list_id, position)
            .await?
            .ok_or_else(|| card_not_found(id))?;
        if !moved {
            return Ok(card);
        }

        let message = if source.id == target.id {
            format!("Card \"{}\" moved to position {}", card.name, card.position)
        } else {
            format!(
                "Card \"{}\" moved from list \"{}\" to list \"{}\" at position {}",
                card.name, source.name, target.name, card.position
            )
        };
        self.record(source.board_id, message).await?;

        Ok(card)
    }

    pub async fn delete(&self, list_id: i32, id: i32) -> Result<(), AppError> {
        let card = self.get(list_id, id).await?;
        let list = self.list(list_id).await?;

        if !CardRepository::new(self.db).delete(id).await? {
            return Err(card_not_found(id));
        }

        self.record(list.board_id, format!("Card \"{}\" deleted", card.name))
            .await?;

        Ok(())
    }

    async fn list(&self, list_id: i32) -> Result<BoardList, AppError> {
        BoardListRepository::new(self.db)
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List {} not found", list_id)))
    }

    async fn record(&self, board_id: i32, message: String) -> Result<(), AppError> {
        ActivityRepository::new(self.db)
            .create(board_id, message)
            .await?;
        Ok(())
    }
}

fn card_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Card {} not found", id))
}
