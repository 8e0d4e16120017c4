use super::*;

/// Tests a partial card update.
///
/// Verifies that the position is never touched by an update.
///
/// Expected: Ok(Some) with the new description and unchanged position
#[tokio::test]
async fn updates_description_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let cards = factory::helpers::create_cards(db, list.id, 2).await?;

    let updated = CardRepository::new(db)
        .update(UpdateCardParams {
            id: cards[1].id,
            description: Some("Details".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, cards[1].name);
    assert_eq!(updated.description, "Details");
    assert_eq!(updated.position, 2);

    Ok(())
}
