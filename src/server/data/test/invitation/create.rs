use super::*;

/// Tests inviting a user.
///
/// Verifies that the invitation carries the workspace name and is detected by `exists`.
///
/// Expected: Ok with the invitation stored
#[tokio::test]
async fn creates_invitation() -> Result<(), DbErr> {
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

    assert_eq!(invitation.workspace_id, workspace.id);
    assert_eq!(invitation.workspace_name, workspace.name);
    assert_eq!(invitation.user_id, invitee.id);
    assert!(repo.exists(workspace.id, invitee.id).await?);
    assert!(!repo.exists(workspace.id, owner.id).await?);

    Ok(())
}
