use super::*;

/// Tests creating a workspace.
///
/// Verifies that the creator becomes a member holding every right.
///
/// Expected: Ok with an admin membership for the creator
#[tokio::test]
async fn creates_workspace_with_creator_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let workspace = WorkspaceRepository::new(db)
        .create(CreateWorkspaceParams {
            creator_id: user.id,
            name: "Engineering".to_string(),
            description: String::new(),
            favicon_url: None,
        })
        .await?;

    assert_eq!(workspace.name, "Engineering");
    assert_eq!(workspace.creator_id, user.id);

    let member = MemberRepository::new(db)
        .find(workspace.id, user.id)
        .await?
        .unwrap();
    assert!(member.admin);
    assert!(member.has(MemberRight::CreateBoard));
    assert!(member.has(MemberRight::DeleteBoard));
    assert!(member.has(MemberRight::Invite));

    Ok(())
}

/// Tests creating a workspace for a user that does not exist.
///
/// Verifies that the transaction leaves no workspace behind.
///
/// Expected: Err(DbErr) and no rows
#[tokio::test]
async fn fails_for_missing_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WorkspaceRepository::new(db)
        .create(CreateWorkspaceParams {
            creator_id: 404,
            name: "Orphan".to_string(),
            description: String::new(),
            favicon_url: None,
        })
        .await;

    assert!(result.is_err());
    assert!(WorkspaceRepository::new(db).get_by_member(404).await?.is_empty());

    Ok(())
}
