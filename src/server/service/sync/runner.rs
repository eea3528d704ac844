//! Serialized entry point for catalog synchronization.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::server::{
    model::sync::SyncReport,
    service::sync::{source::FilmSource, SyncService},
};

/// Runs sync passes one at a time.
///
/// Shared by the startup trigger and the cron job. A pass requested while another is
/// still running is skipped rather than queued.
#[derive(Clone)]
pub struct SyncRunner {
    db: DatabaseConnection,
    source: Arc<dyn FilmSource>,
    concurrency: usize,
    running: Arc<Mutex<()>>,
}

impl SyncRunner {
    pub fn new(db: DatabaseConnection, source: Arc<dyn FilmSource>, concurrency: usize) -> Self {
        Self {
            db,
            source,
            concurrency,
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Runs one pass unless one is already in progress.
    ///
    /// Failures are logged and swallowed; the next trigger tries again.
    ///
    /// # Returns
    /// - `Some(SyncReport)` - Pass completed
    /// - `None` - Skipped because a pass was running, or the film list fetch failed
    pub async fn run(&self) -> Option<SyncReport> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::info!("Catalog sync already running, skipping this trigger");
            return None;
        };

        let service = SyncService::new(&self.db, self.source.as_ref(), self.concurrency);

        match service.run().await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::error!("Catalog sync failed: {}", e);
                None
            }
        }
    }
}
