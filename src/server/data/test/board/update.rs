use super::*;

/// Tests a partial board update.
///
/// Verifies that the list counter is never touched by an update.
///
/// Expected: Ok(Some) with the new name and unchanged `list_nb`
#[tokio::test]
async fn updates_name_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    factory::helpers::create_lists(db, board.id, 2).await?;

    let updated = BoardRepository::new(db)
        .update(UpdateBoardParams {
            id: board.id,
            name: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.background_color, board.background_color);
    assert_eq!(updated.list_nb, 2);

    Ok(())
}
