use super::*;

/// Tests moving a list towards the end of the board.
///
/// Verifies that the lists in between shift up by one.
///
/// Expected: order [b, c, a, d]
#[tokio::test]
async fn moves_list_forward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 4).await?;
    let (a, b, c, d) = (lists[0].id, lists[1].id, lists[2].id, lists[3].id);

    let (moved, changed) = BoardListRepository::new(db).move_to(a, 3).await?.unwrap();

    assert!(changed);

    assert_eq!(moved.position, 3);
    assert_eq!(ordered_ids(db, board.id).await?, vec![b, c, a, d]);

    Ok(())
}

/// Tests moving a list towards the start of the board.
///
/// Expected: order [d, a, b, c]
#[tokio::test]
async fn moves_list_backward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 4).await?;
    let (a, b, c, d) = (lists[0].id, lists[1].id, lists[2].id, lists[3].id);

    let (moved, _) = BoardListRepository::new(db).move_to(d, 1).await?.unwrap();

    assert_eq!(moved.position, 1);
    assert_eq!(ordered_ids(db, board.id).await?, vec![d, a, b, c]);

    Ok(())
}

/// Tests moving a list onto its own position.
///
/// Expected: Ok(Some((list, false))) with nothing reordered
#[tokio::test]
async fn keeps_order_for_same_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 3).await?;
    let ids: Vec<i32> = lists.iter().map(|l| l.id).collect();

    let (moved, changed) = BoardListRepository::new(db).move_to(ids[1], 2).await?.unwrap();

    assert!(!changed);
    assert_eq!(moved.position, 2);
    assert_eq!(ordered_ids(db, board.id).await?, ids);

    Ok(())
}

/// Tests rejecting targets outside of `1..=list_nb`.
///
/// Verifies that a rejected move leaves the board untouched.
///
/// Expected: Err(PositionError::OutOfRange) for 0 and list_nb + 1
#[tokio::test]
async fn rejects_out_of_range_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 3).await?;
    let ids: Vec<i32> = lists.iter().map(|l| l.id).collect();
    let repo = BoardListRepository::new(db);

    let below = repo.move_to(ids[0], 0).await;
    let above = repo.move_to(ids[0], 4).await;

    assert!(matches!(
        below,
        Err(AppError::PositionErr(PositionError::OutOfRange { position: 0, max: 3 }))
    ));
    assert!(matches!(
        above,
        Err(AppError::PositionErr(PositionError::OutOfRange { position: 4, max: 3 }))
    ));
    assert_eq!(ordered_ids(db, board.id).await?, ids);

    Ok(())
}

/// Tests moving a missing list.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(BoardListRepository::new(db).move_to(404, 1).await?.is_none());

    Ok(())
}

/// Tests that a drifted board counter aborts the move.
///
/// Expected: Err(InternalError::CounterMismatch)
#[tokio::test]
async fn fails_on_counter_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 2).await?;

    entity::board::ActiveModel {
        id: ActiveValue::Unchanged(board.id),
        list_nb: ActiveValue::Set(5),
        ..Default::default()
    }
    .update(db)
    .await?;

    let result = BoardListRepository::new(db).move_to(lists[0].id, 2).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::CounterMismatch {
            counter: 5,
            actual: 2,
            ..
        }))
    ));

    Ok(())
}
