use super::*;

/// Tests requesting a second code for the same user.
///
/// Verifies that the first code is dropped and the attempt counter starts over.
///
/// Expected: only the second code remains
#[tokio::test]
async fn replaces_pending_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = VerificationCodeRepository::new(db);
    let expires_at = Utc::now() + Duration::minutes(15);

    let first = repo
        .replace(user.id, "111111".to_string(), expires_at)
        .await?;
    repo.record_failed_attempt(first.id).await?;
    let second = repo
        .replace(user.id, "222222".to_string(), expires_at)
        .await?;

    let pending = repo.find_by_user(user.id).await?.unwrap();
    assert_eq!(pending.id, second.id);
    assert_eq!(pending.code, "222222");
    assert_eq!(pending.attempts, 0);
    assert_eq!(repo.record_failed_attempt(first.id).await?, None);

    Ok(())
}

/// Tests counting wrong attempts and deleting by user.
///
/// Expected: attempts 1 then 2, then Ok(true) and Ok(false) on deletion
#[tokio::test]
async fn counts_attempts_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = VerificationCodeRepository::new(db);
    let code = repo
        .replace(user.id, "123456".to_string(), Utc::now() + Duration::minutes(15))
        .await?;

    assert_eq!(repo.record_failed_attempt(code.id).await?, Some(1));
    assert_eq!(repo.record_failed_attempt(code.id).await?, Some(2));
    assert!(repo.delete_by_user(user.id).await?);
    assert!(!repo.delete_by_user(user.id).await?);
    assert!(repo.find_by_user(user.id).await?.is_none());

    Ok(())
}
