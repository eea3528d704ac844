mod model;
mod server;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::catalog_sync,
    service::sync::{runner::SyncRunner, source::SwapiClient},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movie_catalog=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;

    startup::check_for_admin(&db, &config).await?;

    let source = SwapiClient::new(
        http_client,
        config.swapi_base_url.clone(),
        config.upstream_max_retries,
    );
    let sync = SyncRunner::new(db.clone(), Arc::new(source), config.sync_concurrency);

    let bind_address = config.bind_address();
    let state = AppState::new(db, config, sync);

    if state.config.sync_on_startup {
        let runner = state.sync.clone();
        let db = state.db.clone();
        tokio::spawn(async move {
            tracing::info!("Running catalog sync on startup");
            catalog_sync::run_catalog_sync(&runner, &db).await;
        });
    }

    let mut scheduler = catalog_sync::start_scheduler(&state).await?;

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", bind_address, e)))?;

    tracing::info!("Listening on http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/api/docs", bind_address);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    scheduler.shutdown().await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
