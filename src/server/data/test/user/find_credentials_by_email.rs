use super::*;

/// Tests reading the stored hash for login.
///
/// Expected: Ok(Some) with the password hash
#[tokio::test]
async fn returns_hash_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("han@example.com")
        .password_hash("$argon2id$stub")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("han@example.com").await?;

    assert!(credentials.is_some());
    let credentials = credentials.unwrap();
    assert_eq!(credentials.user.email, "han@example.com");
    assert_eq!(credentials.password_hash.as_deref(), Some("$argon2id$stub"));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
