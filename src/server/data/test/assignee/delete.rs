use super::*;

/// Tests unassigning a user.
///
/// Expected: Ok(true), then Ok(false) once nothing is left
#[tokio::test]
async fn unassigns_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;
    let repo = AssigneeRepository::new(db);

    repo.create(card.id, owner.id).await?;

    assert!(repo.delete(card.id, owner.id).await?);
    assert!(!repo.delete(card.id, owner.id).await?);
    assert!(!repo.exists(card.id, owner.id).await?);

    Ok(())
}
