use super::*;

/// Tests recording board history.
///
/// Verifies ordering and that clearing a board removes only its entries.
///
/// Expected: newest entry first, other board untouched
#[tokio::test]
async fn records_and_clears_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, workspace, board) = factory::helpers::create_board_with_owner(db).await?;
    let other = factory::board::create_board(db, workspace.id).await?;
    let repo = ActivityRepository::new(db);

    let created = repo.create(board.id, "List To do created".to_string()).await?;
    let moved = repo.create(board.id, "List To do moved to position 2".to_string()).await?;
    repo.create(other.id, "Card created".to_string()).await?;

    let messages: Vec<i32> = repo
        .get_by_board(board.id)
        .await?
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(messages, vec![moved.id, created.id]);

    assert_eq!(repo.delete_by_board(board.id).await?, 2);
    assert!(repo.get_by_board(board.id).await?.is_empty());
    assert_eq!(repo.get_by_board(other.id).await?.len(), 1);

    Ok(())
}
