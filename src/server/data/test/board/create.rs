use super::*;

/// Tests creating a board.
///
/// Verifies that a new board starts without lists.
///
/// Expected: Ok with `list_nb` 0
#[tokio::test]
async fn creates_empty_board() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let workspace = factory::workspace::create_workspace(db, user.id).await?;

    let board = BoardRepository::new(db)
        .create(CreateBoardParams {
            workspace_id: workspace.id,
            name: "Sprint 12".to_string(),
            background_color: "#1d4ed8".to_string(),
        })
        .await?;

    assert_eq!(board.workspace_id, workspace.id);
    assert_eq!(board.name, "Sprint 12");
    assert_eq!(board.list_nb, 0);

    Ok(())
}
