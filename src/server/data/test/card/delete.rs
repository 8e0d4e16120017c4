use super::*;

/// Tests deleting the first card of a list.
///
/// Expected: Ok(true), remaining cards renumbered from 1
#[tokio::test]
async fn closes_gap_after_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let cards = factory::helpers::create_cards(db, list.id, 3).await?;

    assert!(CardRepository::new(db).delete(cards[0].id).await?);
    assert_eq!(
        ordered_ids(db, list.id).await?,
        vec![cards[1].id, cards[2].id]
    );

    Ok(())
}

/// Tests deleting a missing card.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CardRepository::new(db).delete(404).await?);

    Ok(())
}
