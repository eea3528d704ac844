//! Cron jobs.

pub mod catalog_sync;
