//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning a workspace with one board.
///
/// The user is the workspace creator and holds every member right.
///
/// # Returns
/// - `Ok((user, workspace, board))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::workspace::Model,
        entity::board::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let workspace = crate::factory::workspace::create_workspace(db, user.id).await?;
    let board = crate::factory::board::create_board(db, workspace.id).await?;

    Ok((user, workspace, board))
}

/// Creates `count` lists on a board, returning them in position order.
///
/// # Returns
/// - `Ok(Vec<entity::board_list::Model>)` - Lists at positions 1..=count
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lists(
    db: &DatabaseConnection,
    board_id: i32,
    count: usize,
) -> Result<Vec<entity::board_list::Model>, DbErr> {
    let mut lists = Vec::with_capacity(count);
    for _ in 0..count {
        lists.push(crate::factory::board_list::create_list(db, board_id).await?);
    }
    Ok(lists)
}

/// Creates `count` cards in a list, returning them in position order.
///
/// # Returns
/// - `Ok(Vec<entity::card::Model>)` - Cards at positions 1..=count
/// - `Err(DbErr)` - Database error during creation
pub async fn create_cards(
    db: &DatabaseConnection,
    list_id: i32,
    count: usize,
) -> Result<Vec<entity::card::Model>, DbErr> {
    let mut cards = Vec::with_capacity(count);
    for _ in 0..count {
        cards.push(crate::factory::card::create_card(db, list_id).await?);
    }
    Ok(cards)
}
