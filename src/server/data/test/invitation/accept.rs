use super::*;

/// Tests accepting an invitation.
///
/// Verifies that the user becomes a member and the invitation disappears.
///
/// Expected: Ok(true), membership present, invitation gone
#[tokio::test]
async fn turns_invitation_into_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;

    let repo = InvitationRepository::new(db);
    let invitation = repo.create(workspace.id, invitee.id).await?;

    assert!(repo.accept(invitation.id).await?);

    let member = MemberRepository::new(db)
        .find(workspace.id, invitee.id)
        .await?
        .unwrap();
    assert!(!member.admin);
    assert!(repo.find_by_id(invitation.id).await?.is_none());

    Ok(())
}

/// Tests accepting a missing invitation.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!InvitationRepository::new(db).accept(404).await?);

    Ok(())
}
