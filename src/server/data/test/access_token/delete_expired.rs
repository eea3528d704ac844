use super::*;

/// Tests purging expired tokens.
///
/// Expected: Ok(1) with the live token kept
#[tokio::test]
async fn deletes_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let live = factory::create_token(db, user.id).await?;
    factory::create_expired_token(db, user.id).await?;

    let repo = AccessTokenRepository::new(db);
    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_user_by_token(&live.token, Utc::now())
        .await?
        .is_some());

    Ok(())
}
