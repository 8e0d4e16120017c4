use super::*;

/// Tests that a member holding the board creation right passes.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_create_board_with_right() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::MemberFactory::new(db, workspace.id, user.id)
        .can_create_board(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CreateBoard(workspace.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a plain member cannot delete boards.
///
/// Expected: Err(AuthError::AccessDenied) naming the board deletion right
#[tokio::test]
async fn denies_delete_board_without_right() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, owner.id).await?;
    factory::member::MemberFactory::new(db, workspace.id, user.id)
        .can_create_board(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::DeleteBoard(workspace.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, message))) => {
            assert!(message.contains("board deletion"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that admins pass every right check without the individual flags.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_passes_every_right() -> Result<(), AppError> {
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
        .admin(true)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[
            Permission::WorkspaceAdmin(workspace.id),
            Permission::CreateBoard(workspace.id),
            Permission::DeleteBoard(workspace.id),
            Permission::Invite(workspace.id),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}
