use super::*;

/// Tests a partial workspace update.
///
/// Expected: Ok(Some) with the new description and the old name
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let created = factory::workspace::create_workspace(db, user.id).await?;

    let updated = WorkspaceRepository::new(db)
        .update(UpdateWorkspaceParams {
            id: created.id,
            description: Some("Roadmap and planning".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, "Roadmap and planning");

    Ok(())
}

/// Tests updating a missing workspace.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_workspace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WorkspaceRepository::new(db)
        .update(UpdateWorkspaceParams {
            id: 404,
            name: Some("Nothing".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
