use super::*;

/// Tests that notifications are listed newest first and per user.
///
/// Expected: Ok with the second notification first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = NotificationRepository::new(db);

    let first = repo.create(user.id, "first".to_string()).await?;
    let second = repo.create(user.id, "second".to_string()).await?;
    repo.create(other.id, "elsewhere".to_string()).await?;

    let ids: Vec<i32> = repo
        .get_by_user(user.id)
        .await?
        .into_iter()
        .map(|n| n.id)
        .collect();

    assert!(!first.is_read);
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
