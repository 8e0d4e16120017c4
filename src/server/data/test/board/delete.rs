use super::*;

/// Tests deleting a board.
///
/// Verifies that its lists are deleted with it.
///
/// Expected: Ok(true) and no remaining list
#[tokio::test]
async fn deletes_board_with_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let lists = factory::helpers::create_lists(db, board.id, 3).await?;

    assert!(BoardRepository::new(db).delete(board.id).await?);
    assert!(BoardRepository::new(db).find_by_id(board.id).await?.is_none());
    for list in lists {
        assert!(BoardListRepository::new(db).find_by_id(list.id).await?.is_none());
    }

    Ok(())
}

/// Tests deleting a missing board.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!BoardRepository::new(db).delete(404).await?);

    Ok(())
}
