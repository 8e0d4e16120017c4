use super::*;

/// Tests that a workspace member passes the membership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::create_member(db, workspace.id, user.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::WorkspaceMember(workspace.id)])
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests that outsiders are denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_outsider() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    AuthSession::new(session).set_user_id(stranger.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::WorkspaceMember(workspace.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == stranger.id
    ));

    Ok(())
}

/// Tests checking a workspace that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_workspace() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::WorkspaceMember(404)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only the creator passes the creator check, even against other admins.
///
/// Expected: Ok for the creator, Err(AuthError::AccessDenied) for an admin
#[tokio::test]
async fn only_creator_passes_creator_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    let admin = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::MemberFactory::new(db, workspace.id, admin.id)
        .all_rights()
        .build()
        .await?;

    AuthSession::new(session).set_user_id(admin.id).await?;
    let denied = AuthGuard::new(db, session)
        .require(&[Permission::WorkspaceCreator(workspace.id)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    AuthSession::new(session).set_user_id(owner.id).await?;
    let granted = AuthGuard::new(db, session)
        .require(&[Permission::WorkspaceCreator(workspace.id)])
        .await?;
    assert_eq!(granted.id, owner.id);

    Ok(())
}
