use super::*;

/// Tests adding a member.
///
/// Verifies that a new member starts without any right and carries its username.
///
/// Expected: Ok with every right off
#[tokio::test]
async fn creates_member_without_rights() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;

    let member = MemberRepository::new(db).create(workspace.id, user.id).await?;

    assert_eq!(member.user_id, user.id);
    assert_eq!(member.username, user.username);
    assert!(!member.admin);
    assert!(!member.has(MemberRight::CreateBoard));
    assert!(!member.has(MemberRight::DeleteBoard));
    assert!(!member.has(MemberRight::Invite));

    Ok(())
}
