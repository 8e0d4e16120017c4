use crate::server::{
    data::{board::BoardRepository, board_list::BoardListRepository, card::CardRepository},
    error::{internal::InternalError, AppError},
    util::position::PositionError,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod move_to;

/// IDs of the board's lists in position order, asserting positions are exactly 1..=N
/// and that `list_nb` equals N.
async fn ordered_ids(db: &DatabaseConnection, board_id: i32) -> Result<Vec<i32>, AppError> {
    let lists = BoardListRepository::new(db).get_by_board(board_id).await?;
    let board = BoardRepository::new(db).find_by_id(board_id).await?.unwrap();

    let positions: Vec<i32> = lists.iter().map(|l| l.position).collect();
    let expected: Vec<i32> = (1..=lists.len() as i32).collect();
    assert_eq!(positions, expected);
    assert_eq!(board.list_nb, lists.len() as i32);

    Ok(lists.into_iter().map(|l| l.id).collect())
}
