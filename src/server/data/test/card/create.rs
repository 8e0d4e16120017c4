use super::*;

/// Tests appending cards to a list.
///
/// Expected: positions 1, 2 and `card_nb` 2
#[tokio::test]
async fn appends_cards_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let repo = CardRepository::new(db);

    let first = repo.create(card_params(list.id, "Write tests")).await?;
    let second = repo.create(card_params(list.id, "Ship it")).await?;

    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);
    assert_eq!(ordered_ids(db, list.id).await?, vec![first.id, second.id]);

    Ok(())
}

/// Tests appending a card to a missing list.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db).create(card_params(404, "Lost")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
