use super::*;

/// Tests deleting a workspace.
///
/// Verifies that memberships are removed with it.
///
/// Expected: Ok(true) and no remaining membership
#[tokio::test]
async fn deletes_workspace_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, user.id).await?;

    let deleted = WorkspaceRepository::new(db).delete(workspace.id).await?;

    assert!(deleted);
    assert!(!MemberRepository::new(db).is_member(workspace.id, user.id).await?);

    Ok(())
}

/// Tests deleting a missing workspace.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_workspace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!WorkspaceRepository::new(db).delete(404).await?);

    Ok(())
}
