use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        assignee::AssigneeRepository, board::BoardRepository, board_list::BoardListRepository,
        card::CardRepository, member::MemberRepository, notification::NotificationRepository,
    },
    error::AppError,
    model::{assignee::Assignee, card::Card},
};

pub struct AssigneeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssigneeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_card(&self, card_id: i32) -> Result<Vec<Assignee>, AppError> {
        Ok(AssigneeRepository::new(self.db).get_by_card(card_id).await?)
    }

    /// Assigns a member of the card's workspace and notifies them.
    ///
    /// # Returns
    /// - `Ok(Assignee)` - New assignment
    /// - `Err(AppError::NotFound)` - `user_id` is not a member of the card's workspace
    /// - `Err(AppError::Conflict)` - Already assigned
    pub async fn assign(&self, card_id: i32, user_id: i32) -> Result<Assignee, AppError> {
        let assignee_repo = AssigneeRepository::new(self.db);

        let card = self.card(card_id).await?;
        let workspace_id = self.workspace_of(&card).await?;

        if !MemberRepository::new(self.db)
            .is_member(workspace_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} is not a member of workspace {}",
                user_id, workspace_id
            )));
        }

        if assignee_repo.exists(card_id, user_id).await? {
            return Err(AppError::Conflict(format!(
                "User {} is already assigned to card {}",
                user_id, card_id
            )));
        }

        let assignee = assignee_repo.create(card_id, user_id).await?;

        NotificationRepository::new(self.db)
            .create(
                user_id,
                format!("You have been assigned to the card \"{}\"", card.name),
            )
            .await?;

        Ok(assignee)
    }

    pub async fn unassign(&self, card_id: i32, user_id: i32) -> Result<(), AppError> {
        if !AssigneeRepository::new(self.db)
            .delete(card_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "User {} is not assigned to card {}",
                user_id, card_id
            )));
        }

        Ok(())
    }

    async fn card(&self, card_id: i32) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .find_by_id(card_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Card {} not found", card_id)))
    }

    async fn workspace_of(&self, card: &Card) -> Result<i32, AppError> {
        let list = BoardListRepository::new(self.db)
            .find_by_id(card.list_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List {} not found", card.list_id)))?;
        let board = BoardRepository::new(self.db)
            .find_by_id(list.board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board {} not found", list.board_id)))?;

        Ok(board.workspace_id)
    }
}
