use super::*;

/// Tests storing a newly issued token.
///
/// Expected: Ok with the token resolvable to its user
#[tokio::test]
async fn stores_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::hours(1);

    let repo = AccessTokenRepository::new(db);
    let token = repo
        .create("a".repeat(32), user.id, expires_at)
        .await?;

    assert_eq!(token.user_id, user.id);
    assert_eq!(token.token.len(), 32);

    let resolved = repo.find_user_by_token(&token.token, Utc::now()).await?;
    assert_eq!(resolved.map(|u| u.id), Some(user.id));

    Ok(())
}
