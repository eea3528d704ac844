use super::*;

/// Tests resolving an expired token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_expired_token(db, user.id).await?;

    let repo = AccessTokenRepository::new(db);
    let resolved = repo.find_user_by_token(&token.token, Utc::now()).await?;

    assert!(resolved.is_none());

    Ok(())
}

/// Tests resolving a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccessTokenRepository::new(db);
    let resolved = repo
        .find_user_by_token("doesnotexistdoesnotexistdoesnot0", Utc::now())
        .await?;

    assert!(resolved.is_none());

    Ok(())
}

/// Tests that a token is rejected once `now` passes its expiry.
///
/// Expected: Some before expiry, None after
#[tokio::test]
async fn respects_reference_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let expires_at = Utc::now() + Duration::minutes(10);
    let token = factory::access_token::AccessTokenFactory::new(db, user.id)
        .expires_at(expires_at)
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);

    assert!(repo
        .find_user_by_token(&token.token, expires_at - Duration::minutes(1))
        .await?
        .is_some());
    assert!(repo
        .find_user_by_token(&token.token, expires_at)
        .await?
        .is_none());

    Ok(())
}
