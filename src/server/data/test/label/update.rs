use super::*;

/// Tests changing the color of a label.
///
/// Expected: Ok(Some) with the title kept
#[tokio::test]
async fn updates_color_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;
    let repo = LabelRepository::new(db);

    let label = repo
        .create(CreateLabelParams {
            card_id: card.id,
            title: "urgent".to_string(),
            color: "orange".to_string(),
        })
        .await?;

    let updated = repo
        .update(UpdateLabelParams {
            id: label.id,
            color: Some("red".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "urgent");
    assert_eq!(updated.color, "red");

    assert!(repo.delete(label.id).await?);
    assert!(repo.find_by_id(label.id).await?.is_none());

    Ok(())
}
