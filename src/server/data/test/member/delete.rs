use super::*;

/// Tests removing a member.
///
/// Expected: Ok(true) and the user no longer a member
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
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

    let repo = MemberRepository::new(db);

    assert!(repo.delete(workspace.id, user.id).await?);
    assert!(!repo.is_member(workspace.id, user.id).await?);
    assert!(repo.is_member(workspace.id, owner.id).await?);

    Ok(())
}

/// Tests removing a user that is not a member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;

    assert!(!MemberRepository::new(db).delete(workspace.id, 404).await?);

    Ok(())
}
