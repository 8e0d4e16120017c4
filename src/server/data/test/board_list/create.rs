use super::*;

/// Tests appending lists to a board.
///
/// Verifies that each list lands after the previous one and the counter follows.
///
/// Expected: positions 1, 2, 3 and `list_nb` 3
#[tokio::test]
async fn appends_lists_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let repo = BoardListRepository::new(db);

    let todo = repo.create(board.id, "To do".to_string()).await?;
    let doing = repo.create(board.id, "Doing".to_string()).await?;
    let done = repo.create(board.id, "Done".to_string()).await?;

    assert_eq!(todo.position, 1);
    assert_eq!(doing.position, 2);
    assert_eq!(done.position, 3);
    assert_eq!(done.card_nb, 0);
    assert_eq!(ordered_ids(db, board.id).await?, vec![todo.id, doing.id, done.id]);

    Ok(())
}

/// Tests appending a list to a missing board.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BoardListRepository::new(db)
        .create(404, "Nowhere".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
