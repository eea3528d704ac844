use super::*;

/// Tests creating a regular user.
///
/// Expected: Ok with the email and role stored
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "luke@example.com".to_string(),
            Some("hash".to_string()),
            Role::Regular,
        )
        .await?;

    assert_eq!(user.email, "luke@example.com");
    assert_eq!(user.role, Role::Regular);
    assert!(!user.is_admin());

    let found = repo.find_by_id(user.id).await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("leia@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create("leia@example.com".to_string(), None, Role::Regular)
        .await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
