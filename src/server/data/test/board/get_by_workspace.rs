use super::*;

/// Tests listing the boards of a workspace.
///
/// Expected: Ok with the boards of that workspace only
#[tokio::test]
async fn returns_boards_of_workspace() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, user.id).await?;
    let other = factory::workspace::create_workspace(db, user.id).await?;
    let first = factory::board::create_board(db, workspace.id).await?;
    let second = factory::board::create_board(db, workspace.id).await?;
    factory::board::create_board(db, other.id).await?;

    let ids: Vec<i32> = BoardRepository::new(db)
        .get_by_workspace(workspace.id)
        .await?
        .into_iter()
        .map(|b| b.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
