//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::sync::runner::SyncRunner};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Clones share the pool.
    pub db: DatabaseConnection,

    pub config: Arc<Config>,

    /// Catalog sync entry point shared by the startup trigger and the scheduler.
    pub sync: SyncRunner,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Loaded application configuration
    /// - `sync` - Catalog sync runner
    pub fn new(db: DatabaseConnection, config: Config, sync: SyncRunner) -> Self {
        Self {
            db,
            config: Arc::new(config),
            sync,
        }
    }
}
