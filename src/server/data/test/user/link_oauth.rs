use super::*;

/// Tests attaching an OAuth identity to an existing password account.
///
/// Expected: Ok with the identity stored and the password kept
#[tokio::test]
async fn links_identity_to_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .password_hash("digest")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .link_oauth(
            created.id,
            OAuthIdentity {
                provider: "github".to_string(),
                subject: "99".to_string(),
            },
        )
        .await?;

    assert_eq!(user.oauth_provider.as_deref(), Some("github"));
    assert_eq!(user.oauth_subject.as_deref(), Some("99"));
    assert_eq!(user.password_hash.as_deref(), Some("digest"));

    Ok(())
}

/// Tests linking an identity to a missing account.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .link_oauth(
            404,
            OAuthIdentity {
                provider: "github".to_string(),
                subject: "1".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
