use super::*;

/// Tests registering through the API and logging in.
///
/// Expected: 200 with a 32-character bearer token accepted by a protected route
#[tokio::test]
async fn login_returns_usable_token() {
    let app = TestApp::new().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/users",
            None,
            Some(json!({ "email": "luke@example.com", "password": "Tatooine#1" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "luke@example.com", "password": "Tatooine#1" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "Bearer");
    let token = body["access_token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 32);

    let (status, _) = app.send(Method::GET, "/movies", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

/// Tests a wrong password.
///
/// Expected: 401 with the uniform credentials message
#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new().await;

    app.send(
        Method::POST,
        "/users",
        None,
        Some(json!({ "email": "han@example.com", "password": "Falcon#123" })),
    )
    .await;

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "han@example.com", "password": "Falcon#999" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password");
}

/// Tests a malformed login body.
///
/// Expected: 400 with an email field error
#[tokio::test]
async fn invalid_login_body_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "not-an-email", "password": "x" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "email");
}
