use super::*;

/// Tests assigning users to a card.
///
/// Verifies that assignees are returned with their usernames.
///
/// Expected: Ok with both assignees listed
#[tokio::test]
async fn assigns_users_to_card() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, workspace, board) = factory::helpers::create_board_with_owner(db).await?;
    let teammate = factory::user::create_user(db).await?;
    factory::member::create_member(db, workspace.id, teammate.id).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;
    let repo = AssigneeRepository::new(db);

    repo.create(card.id, owner.id).await?;
    let assigned = repo.create(card.id, teammate.id).await?;

    assert_eq!(assigned.username, teammate.username);
    assert!(repo.exists(card.id, owner.id).await?);

    let usernames: Vec<String> = repo
        .get_by_card(card.id)
        .await?
        .into_iter()
        .map(|a| a.username)
        .collect();
    assert_eq!(usernames, vec![owner.username, teammate.username]);

    Ok(())
}
