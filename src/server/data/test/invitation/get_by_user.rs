use super::*;

/// Tests listing the pending invitations of a user.
///
/// Expected: Ok with one invitation per inviting workspace
#[tokio::test]
async fn returns_invitations_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let first = factory::workspace::create_workspace(db, owner.id).await?;
    let second = factory::workspace::create_workspace(db, owner.id).await?;

    let repo = InvitationRepository::new(db);
    repo.create(first.id, invitee.id).await?;
    repo.create(second.id, invitee.id).await?;

    let mut workspace_ids: Vec<i32> = repo
        .get_by_user(invitee.id)
        .await?
        .into_iter()
        .map(|i| i.workspace_id)
        .collect();
    workspace_ids.sort();

    assert_eq!(workspace_ids, vec![first.id, second.id]);
    assert!(repo.get_by_user(owner.id).await?.is_empty());

    Ok(())
}
