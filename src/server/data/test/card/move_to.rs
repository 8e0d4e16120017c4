use super::*;

/// Tests reordering a card within its list.
///
/// Expected: order [b, c, a]
#[tokio::test]
async fn moves_card_within_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let cards = factory::helpers::create_cards(db, list.id, 3).await?;
    let (a, b, c) = (cards[0].id, cards[1].id, cards[2].id);

    let (moved, changed) = CardRepository::new(db).move_to(a, list.id, 3).await?.unwrap();

    assert!(changed);
    assert_eq!(moved.position, 3);
    assert_eq!(moved.list_id, list.id);
    assert_eq!(ordered_ids(db, list.id).await?, vec![b, c, a]);

    Ok(())
}

/// Tests moving a card onto its own position in its own list.
///
/// Expected: Ok(Some((card, false))) with nothing reordered
#[tokio::test]
async fn keeps_order_for_same_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let cards = factory::helpers::create_cards(db, list.id, 3).await?;
    let ids: Vec<i32> = cards.iter().map(|c| c.id).collect();

    let (moved, changed) = CardRepository::new(db)
        .move_to(ids[1], list.id, 2)
        .await?
        .unwrap();

    assert!(!changed);
    assert_eq!(moved.position, 2);
    assert_eq!(ordered_ids(db, list.id).await?, ids);

    Ok(())
}

/// Tests moving a card into another list.
///
/// Verifies that the source closes its gap, the target opens one and both counters follow.
///
/// Expected: source [a, c], target [x, b, y]
#[tokio::test]
async fn moves_card_across_lists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 2).await?;
    let source = factory::helpers::create_cards(db, lists[0].id, 3).await?;
    let target = factory::helpers::create_cards(db, lists[1].id, 2).await?;
    let (a, b, c) = (source[0].id, source[1].id, source[2].id);
    let (x, y) = (target[0].id, target[1].id);

    let (moved, _) = CardRepository::new(db)
        .move_to(b, lists[1].id, 2)
        .await?
        .unwrap();

    assert_eq!(moved.list_id, lists[1].id);
    assert_eq!(moved.position, 2);
    assert_eq!(ordered_ids(db, lists[0].id).await?, vec![a, c]);
    assert_eq!(ordered_ids(db, lists[1].id).await?, vec![x, b, y]);

    Ok(())
}

/// Tests appending a card at the end of another list.
///
/// Expected: target [x, a] with `card_nb` 2
#[tokio::test]
async fn appends_card_to_other_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 2).await?;
    let a = factory::card::create_card(db, lists[0].id).await?.id;
    let x = factory::card::create_card(db, lists[1].id).await?.id;

    CardRepository::new(db).move_to(a, lists[1].id, 2).await?;

    assert!(ordered_ids(db, lists[0].id).await?.is_empty());
    assert_eq!(ordered_ids(db, lists[1].id).await?, vec![x, a]);

    Ok(())
}

/// Tests moving a card into an empty list.
///
/// Expected: the card alone at position 1
#[tokio::test]
async fn moves_card_into_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 2).await?;
    let cards = factory::helpers::create_cards(db, lists[0].id, 2).await?;

    let (moved, _) = CardRepository::new(db)
        .move_to(cards[0].id, lists[1].id, 1)
        .await?
        .unwrap();

    assert_eq!(moved.position, 1);
    assert_eq!(ordered_ids(db, lists[0].id).await?, vec![cards[1].id]);
    assert_eq!(ordered_ids(db, lists[1].id).await?, vec![cards[0].id]);

    Ok(())
}

/// Tests rejecting out of range targets in both move kinds.
///
/// Verifies that within a list `card_nb + 1` is refused while across lists it is the
/// last accepted position.
///
/// Expected: Err(PositionError::OutOfRange) and no change
#[tokio::test]
async fn rejects_out_of_range_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 2).await?;
    let source = factory::helpers::create_cards(db, lists[0].id, 2).await?;
    let target = factory::helpers::create_cards(db, lists[1].id, 1).await?;
    let repo = CardRepository::new(db);

    let same_list = repo.move_to(source[0].id, lists[0].id, 3).await;
    let other_list = repo.move_to(source[0].id, lists[1].id, 3).await;
    let zero = repo.move_to(source[0].id, lists[1].id, 0).await;

    assert!(matches!(
        same_list,
        Err(AppError::PositionErr(PositionError::OutOfRange { position: 3, max: 2 }))
    ));
    assert!(matches!(
        other_list,
        Err(AppError::PositionErr(PositionError::OutOfRange { position: 3, max: 2 }))
    ));
    assert!(matches!(
        zero,
        Err(AppError::PositionErr(PositionError::OutOfRange { position: 0, .. }))
    ));
    assert_eq!(
        ordered_ids(db, lists[0].id).await?,
        vec![source[0].id, source[1].id]
    );
    assert_eq!(ordered_ids(db, lists[1].id).await?, vec![target[0].id]);

    Ok(())
}

/// Tests moving a card into a missing list.
///
/// Expected: Err(AppError::NotFound) and no change
#[tokio::test]
async fn fails_for_missing_target_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;

    let result = CardRepository::new(db).move_to(card.id, 404, 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(ordered_ids(db, list.id).await?, vec![card.id]);

    Ok(())
}

/// Tests moving a missing card.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;

    assert!(CardRepository::new(db).move_to(404, list.id, 1).await?.is_none());

    Ok(())
}
