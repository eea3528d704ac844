use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{sync::runner::SyncRunner, user::UserService},
    state::AppState,
};

/// Starts the catalog sync scheduler.
///
/// Runs one sync pass on the configured cron expression (daily at midnight by default),
/// each followed by a purge of expired access tokens.
///
/// # Arguments
/// - `state` - Application state holding the sync runner and configuration
///
/// # Returns
/// - `Ok(JobScheduler)` - Started scheduler; keep it alive for jobs to keep firing
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(state: &AppState) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_runner = state.sync.clone();
    let job_db = state.db.clone();

    let job = Job::new_async(state.config.sync_cron.as_str(), move |_uuid, _lock| {
        let runner = job_runner.clone();
        let db = job_db.clone();

        Box::pin(async move {
            run_catalog_sync(&runner, &db).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Catalog sync scheduler started with schedule '{}'",
        state.config.sync_cron
    );

    Ok(scheduler)
}

/// Runs one sync pass and then purges expired tokens. Failures are logged only.
pub async fn run_catalog_sync(runner: &SyncRunner, db: &DatabaseConnection) {
    runner.run().await;

    if let Err(e) = UserService::new(db).purge_expired_tokens().await {
        tracing::error!("Failed to purge expired access tokens: {}", e);
    }
}
