use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown token.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headers = bearer("unknownunknownunknownunknown0000");
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_expired_token(db, user.id).await?;

    let headers = bearer(&token.token);
    let result = AuthGuard::new(db, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests a valid token without extra permissions.
///
/// Expected: Ok(User) for the token's owner
#[tokio::test]
async fn accepts_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;

    let headers = bearer(&token.token);
    let authenticated = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);
    assert_eq!(authenticated.email, user.email);

    Ok(())
}

/// Tests a regular user on an admin-only check.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_regular_user_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_token(db, user.id).await?;

    let headers = bearer(&token.token);
    let result = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
    ));

    Ok(())
}

/// Tests an admin on an admin-only check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let token = factory::create_token(db, admin.id).await?;

    let headers = bearer(&token.token);
    let user = AuthGuard::new(db, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests a token issued by password login.
///
/// Verifies the guard resolves tokens the same way the user service issues them.
///
/// Expected: Ok(User) for the logged-in user
#[tokio::test]
async fn accepts_token_from_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service
        .register(RegisterUserParams {
            email: "lando@example.com".to_string(),
            password: "Bespin#77".to_string(),
            role: entity::user::Role::Regular,
        })
        .await?;
    let token = service.login("lando@example.com", "Bespin#77").await?;

    let headers = bearer(&token.token);
    let authenticated = AuthGuard::new(db, &headers).require(&[]).await?;

    assert_eq!(authenticated.id, user.id);

    Ok(())
}
