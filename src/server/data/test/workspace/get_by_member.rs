use super::*;

/// Tests listing the workspaces a user belongs to.
///
/// Verifies that workspaces the user only created for others or never joined are excluded.
///
/// Expected: Ok with the created and the joined workspace
#[tokio::test]
async fn returns_created_and_joined_workspaces() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let own = factory::workspace::create_workspace(db, user.id).await?;
    let joined = factory::workspace::create_workspace(db, other.id).await?;
    factory::member::create_member(db, joined.id, user.id).await?;
    factory::workspace::create_workspace(db, other.id).await?;

    let mut ids: Vec<i32> = WorkspaceRepository::new(db)
        .get_by_member(user.id)
        .await?
        .into_iter()
        .map(|w| w.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![own.id, joined.id]);

    Ok(())
}

/// Tests a user without any membership.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let workspaces = WorkspaceRepository::new(db).get_by_member(user.id).await?;

    assert!(workspaces.is_empty());

    Ok(())
}
