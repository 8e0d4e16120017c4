use super::*;

/// Tests granting a single right.
///
/// Verifies that the other rights stay untouched.
///
/// Expected: Ok(Some) with only `can_invite` set
#[tokio::test]
async fn grants_single_right() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::create_member(db, workspace.id, user.id).await?;

    let member = MemberRepository::new(db)
        .set_right(workspace.id, user.id, MemberRight::Invite, true)
        .await?
        .unwrap();

    assert!(member.can_invite);
    assert!(!member.can_create_board);
    assert!(!member.can_delete_board);
    assert!(!member.admin);

    Ok(())
}

/// Tests that admins hold every right even with the individual flags off.
///
/// Expected: `has` returns true for each right
#[tokio::test]
async fn admin_implies_every_right() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::create_member(db, workspace.id, user.id).await?;

    let member = MemberRepository::new(db)
        .set_right(workspace.id, user.id, MemberRight::Admin, true)
        .await?
        .unwrap();

    assert!(!member.can_invite);
    assert!(member.has(MemberRight::CreateBoard));
    assert!(member.has(MemberRight::DeleteBoard));
    assert!(member.has(MemberRight::Invite));

    Ok(())
}

/// Tests changing a right of a user outside the workspace.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;

    let result = MemberRepository::new(db)
        .set_right(workspace.id, stranger.id, MemberRight::Invite, true)
        .await?;

    assert!(result.is_none());

    Ok(())
}
