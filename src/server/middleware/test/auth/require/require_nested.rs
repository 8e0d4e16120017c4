use super::*;

/// Tests that board, list and card checks resolve to the owning workspace.
///
/// Expected: Ok(User) for a member of the workspace
#[tokio::test]
async fn grants_nested_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (owner, workspace, board) = factory::helpers::create_board_with_owner(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::member::create_member(db, workspace.id, user.id).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[
            Permission::BoardMember(board.id),
            Permission::ListMember(list.id),
            Permission::CardMember(card.id),
        ])
        .await?;

    assert_eq!(returned.id, user.id);
    assert_ne!(returned.id, owner.id);

    Ok(())
}

/// Tests that outsiders cannot reach cards of a foreign workspace.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_nested_access_to_outsider() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, _, board) = factory::helpers::create_board_with_owner(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let list = factory::board_list::create_list(db, board.id).await?;
    let card = factory::card::create_card(db, list.id).await?;
    AuthSession::new(session).set_user_id(stranger.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::CardMember(card.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));

    Ok(())
}

/// Tests missing nested resources.
///
/// Expected: Err(AppError::NotFound) for a missing board, list and card
#[tokio::test]
async fn fails_for_missing_resources() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;
    let guard = AuthGuard::new(db, session);

    for permission in [
        Permission::BoardMember(404),
        Permission::ListMember(404),
        Permission::CardMember(404),
    ] {
        let result = guard.require(&[permission]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    Ok(())
}
