use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok(Some) with `is_read` set
#[tokio::test]
async fn marks_single_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    let notification = repo.create(user.id, "hello".to_string()).await?;

    let read = repo.mark_read(notification.id).await?.unwrap();

    assert!(read.is_read);
    assert!(repo.mark_read(404).await?.is_none());

    Ok(())
}

/// Tests marking every unread notification of a user as read.
///
/// Expected: Ok(2) and nothing unread left for that user
#[tokio::test]
async fn marks_all_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = NotificationRepository::new(db);

    repo.create(user.id, "one".to_string()).await?;
    repo.create(user.id, "two".to_string()).await?;
    repo.create(other.id, "three".to_string()).await?;

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert!(repo.get_by_user(user.id).await?.iter().all(|n| n.is_read));
    assert!(repo.get_by_user(other.id).await?.iter().all(|n| !n.is_read));

    assert_eq!(repo.delete_by_user(user.id).await?, 2);
    assert!(repo.get_by_user(user.id).await?.is_empty());

    Ok(())
}
