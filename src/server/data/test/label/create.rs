use super::*;

/// Tests attaching labels to a card.
///
/// Expected: Ok with labels listed for that card only
#[tokio::test]
async fn creates_labels_for_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let cards = factory::helpers::create_cards(db, list.id, 2).await?;
    let repo = LabelRepository::new(db);

    let bug = repo
        .create(CreateLabelParams {
            card_id: cards[0].id,
            title: "bug".to_string(),
            color: "red".to_string(),
        })
        .await?;
    repo.create(CreateLabelParams {
        card_id: cards[1].id,
        title: "feature".to_string(),
        color: "green".to_string(),
    })
    .await?;

    let labels = repo.get_by_card(cards[0].id).await?;

    assert_eq!(labels, vec![bug]);

    Ok(())
}
