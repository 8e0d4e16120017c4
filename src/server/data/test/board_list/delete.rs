use super::*;

/// Tests deleting a list in the middle of a board.
///
/// Verifies that the following lists close the gap and the counter drops.
///
/// Expected: Ok(true), order [a, c, d] at positions 1..=3
#[tokio::test]
async fn closes_gap_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 4).await?;
    let (a, b, c, d) = (lists[0].id, lists[1].id, lists[2].id, lists[3].id);

    assert!(BoardListRepository::new(db).delete(b).await?);
    assert_eq!(ordered_ids(db, board.id).await?, vec![a, c, d]);

    Ok(())
}

/// Tests that deleting a list removes its cards.
///
/// Expected: Ok(true) and the card gone
#[tokio::test]
async fn deletes_cards_of_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;

    assert!(BoardListRepository::new(db).delete(list.id).await?);
    assert!(CardRepository::new(db).find_by_id(card.id).await?.is_none());
    assert!(ordered_ids(db, board.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a missing list.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!BoardListRepository::new(db).delete(404).await?);

    Ok(())
}
