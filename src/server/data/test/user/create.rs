use super::*;

/// Tests creating a password account.
///
/// Verifies that the stored row carries the password hash and no OAuth identity.
///
/// Expected: Ok with credentials stored
#[tokio::test]
async fn creates_password_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = Credentials::from_password("correct horse").unwrap();
    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            credentials: Some(credentials.clone()),
            oauth: None,
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, Some(credentials.hash));
    assert!(user.oauth_provider.is_none());

    Ok(())
}

/// Tests creating an account coming from an OAuth provider.
///
/// Expected: Ok with provider and subject stored, no password
#[tokio::test]
async fn creates_oauth_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            credentials: None,
            oauth: Some(OAuthIdentity {
                provider: "github".to_string(),
                subject: "4242".to_string(),
            }),
        })
        .await?;

    assert_eq!(user.oauth_provider.as_deref(), Some("github"));
    assert_eq!(user.oauth_subject.as_deref(), Some("4242"));
    assert!(user.password_hash.is_none());

    Ok(())
}

/// Tests that two accounts cannot share an email address.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = CreateUserParams {
        username: "carol".to_string(),
        email: "carol@example.com".to_string(),
        credentials: None,
        oauth: None,
    };

    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
