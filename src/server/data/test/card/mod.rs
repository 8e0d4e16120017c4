use crate::server::{
    data::{board_list::BoardListRepository, card::CardRepository},
    error::AppError,
    model::card::{CreateCardParams, UpdateCardParams},
    util::position::PositionError,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod move_to;
mod random_moves;
mod update;

/// IDs of the list's cards in position order, asserting positions are exactly 1..=N
/// and that `card_nb` equals N.
async fn ordered_ids(db: &DatabaseConnection, list_id: i32) -> Result<Vec<i32>, AppError> {
    let cards = CardRepository::new(db).get_by_list(list_id).await?;
    let list = BoardListRepository::new(db).find_by_id(list_id).await?.unwrap();

    let positions: Vec<i32> = cards.iter().map(|c| c.position).collect();
    let expected: Vec<i32> = (1..=cards.len() as i32).collect();
    assert_eq!(positions, expected);
    assert_eq!(list.card_nb, cards.len() as i32);

    Ok(cards.into_iter().map(|c| c.id).collect())
}

fn card_params(list_id: i32, name: &str) -> CreateCardParams {
    CreateCardParams {
        list_id,
        name: name.to_string(),
        description: String::new(),
        date_end: None,
    }
}
