use super::*;

/// Tests purging expired codes.
///
/// Expected: Ok(1) with only the live code left
#[tokio::test]
async fn deletes_only_expired_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = factory::user::create_user(db).await?;
    let fresh = factory::user::create_user(db).await?;
    let repo = VerificationCodeRepository::new(db);
    let now = Utc::now();

    repo.replace(stale.id, "111111".to_string(), now - Duration::minutes(1))
        .await?;
    repo.replace(fresh.id, "222222".to_string(), now + Duration::minutes(15))
        .await?;

    assert_eq!(repo.delete_expired(now).await?, 1);
    assert!(repo.find_by_user(stale.id).await?.is_none());
    assert!(repo.find_by_user(fresh.id).await?.is_some());

    Ok(())
}
