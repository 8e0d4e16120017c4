use super::*;

/// Tests a partial update.
///
/// Verifies that only the given fields change.
///
/// Expected: Ok(Some) with the new username and the old email
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: created.id,
            username: Some("renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, created.email);

    Ok(())
}

/// Tests replacing the password.
///
/// Expected: Ok(Some) with the new password hash
#[tokio::test]
async fn replaces_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .password_hash("old")
        .build()
        .await?;
    let credentials = Credentials::from_password("a new password").unwrap();

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: created.id,
            credentials: Some(credentials.clone()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, Some(credentials.hash));

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 404,
            username: Some("ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
