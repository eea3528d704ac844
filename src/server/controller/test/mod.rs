use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    config::Config,
    router::router,
    service::sync::{runner::SyncRunner, source::SwapiClient},
    state::AppState,
};

mod auth;
mod health;

/// Router over a fresh in-memory database with every table created.
struct TestApp {
    _context: TestContext,
    db: DatabaseConnection,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let context = TestBuilder::new()
            .with_favorite_tables()
            .build()
            .await
            .unwrap();
        let db = context.db.clone().unwrap();

        let source = SwapiClient::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/api/").unwrap(),
            0,
        );
        let sync = SyncRunner::new(db.clone(), Arc::new(source), 1);
        let state = AppState::new(db.clone(), test_config(), sync);

        Self {
            _context: context,
            db,
            router: router(state),
        }
    }

    /// Creates a regular user and returns a valid bearer token for it.
    async fn regular_token(&self) -> String {
        let user = factory::create_user(&self.db).await.unwrap();
        factory::create_token(&self.db, user.id).await.unwrap().token
    }

    async fn admin_token(&self) -> String {
        let admin = factory::create_admin(&self.db).await.unwrap();
        factory::create_token(&self.db, admin.id).await.unwrap().token
    }

    /// Sends one request and returns the status with the JSON body (`Null` when empty).
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }
}

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        swapi_base_url: Url::parse("http://127.0.0.1:9/api/").unwrap(),
        sync_cron: "0 0 0 * * *".to_string(),
        sync_on_startup: false,
        sync_concurrency: 1,
        upstream_timeout: Duration::from_secs(1),
        upstream_max_retries: 0,
        token_ttl: chrono::Duration::hours(24),
        admin_email: None,
        admin_password: None,
    }
}
