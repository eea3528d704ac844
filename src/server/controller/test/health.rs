use super::*;

/// Tests the health endpoint without a token.
///
/// Expected: 200 with database "up"
#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

/// Tests the OpenAPI document is served and lists the movie paths.
///
/// Expected: 200 with "/movies/{id}" and the bearer scheme present
#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::GET, "/api/docs/openapi.json", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/movies/{id}"].is_object());
    assert!(body["paths"]["/movies/{id}/{kind}"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
}
