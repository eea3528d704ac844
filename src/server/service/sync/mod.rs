//! Catalog synchronization engine.
//!
//! One pass fetches the film list from a `FilmSource` and reconciles it film by film:
//! related resources are resolved by URL (created when absent), then the movie is
//! upserted by title and its five relation sets replaced inside one transaction.
//! A failed film is counted and logged without stopping the pass.

pub mod runner;
pub mod source;

use std::collections::HashSet;

use futures::{stream, StreamExt};
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{movie::MovieRepository, resource::ResourceRepository},
    error::AppError,
    model::{
        resource::{RelationKind, RelationSets},
        sync::{FilmRecord, MovieFields, MovieUpsert, SyncReport},
    },
};

use self::source::FilmSource;

/// Name stored for a resource whose name could not be fetched. Retried on later passes.
pub const UNKNOWN_NAME: &str = "Unknown";

pub struct SyncService<'a> {
    db: &'a DatabaseConnection,
    source: &'a dyn FilmSource,
    concurrency: usize,
}

impl<'a> SyncService<'a> {
    /// Creates a new SyncService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection; each film is saved in its own transaction
    /// - `source` - Upstream film source
    /// - `concurrency` - Maximum resource lookups in flight for one film
    pub fn new(db: &'a DatabaseConnection, source: &'a dyn FilmSource, concurrency: usize) -> Self {
        Self {
            db,
            source,
            concurrency: concurrency.max(1),
        }
    }

    /// Runs one synchronization pass.
    ///
    /// # Returns
    /// - `Ok(SyncReport)` - Pass completed; individual films may have failed
    /// - `Err(AppError::UpstreamErr)` - Film list could not be fetched, store untouched
    pub async fn run(&self) -> Result<SyncReport, AppError> {
        let films = self.source.fetch_films().await?;

        tracing::info!("Synchronizing {} films", films.len());

        let mut report = SyncReport::default();

        for film in &films {
            if film.title.trim().is_empty() {
                tracing::warn!("Skipping upstream film without a title");
                report.movies_failed += 1;
                continue;
            }

            match self.sync_film(film).await {
                Ok((upsert, resources_created)) => {
                    report.resources_created += resources_created;
                    match upsert {
                        MovieUpsert::Created(id) => {
                            report.movies_created += 1;
                            tracing::debug!("Created movie {} '{}'", id, film.title);
                        }
                        MovieUpsert::Updated(id) => {
                            report.movies_updated += 1;
                            tracing::debug!("Updated movie {} '{}'", id, film.title);
                        }
                    }
                }
                Err(e) => {
                    report.movies_failed += 1;
                    tracing::error!("Failed to synchronize movie '{}': {}", film.title, e);
                }
            }
        }

        tracing::info!(
            "Catalog sync finished: {} created, {} updated, {} failed, {} new resources",
            report.movies_created,
            report.movies_updated,
            report.movies_failed,
            report.resources_created
        );

        Ok(report)
    }

    /// Resolves a film's resources, then saves the movie and its relation sets atomically.
    async fn sync_film(&self, film: &FilmRecord) -> Result<(MovieUpsert, usize), AppError> {
        let (relations, resources_created) = self.resolve_relations(&film.relations).await?;

        let txn = self.db.begin().await?;

        let upsert = MovieRepository::new(&txn)
            .upsert_by_title(&film.title, MovieFields::from_film(film))
            .await?;

        let resource_repo = ResourceRepository::new(&txn);
        for kind in RelationKind::ALL {
            resource_repo
                .replace_for_movie(kind, upsert.id(), relations.get(kind))
                .await?;
        }

        txn.commit().await?;

        Ok((upsert, resources_created))
    }

    /// Maps every relation URL to a local resource ID.
    ///
    /// Duplicate URLs within a category are resolved once. Returns the ID sets and the
    /// number of resources created.
    async fn resolve_relations(
        &self,
        relations: &RelationSets<String>,
    ) -> Result<(RelationSets<i32>, usize), DbErr> {
        let mut seen = HashSet::new();
        let targets: Vec<(RelationKind, &str)> = RelationKind::ALL
            .into_iter()
            .flat_map(|kind| relations.get(kind).iter().map(move |url| (kind, url.as_str())))
            .filter(|target| seen.insert(*target))
            .collect();

        let resolved: Vec<Result<(RelationKind, i32, bool), DbErr>> = stream::iter(targets)
            .map(|(kind, url)| async move {
                self.resolve_resource(kind, url)
                    .await
                    .map(|(id, created)| (kind, id, created))
            })
            .buffer_unordered(self.concurrency)
            .boxed()
            .collect()
            .await;

        let mut ids = RelationSets::default();
        let mut created_count = 0;

        for result in resolved {
            let (kind, id, created) = result?;
            ids.get_mut(kind).push(id);
            if created {
                created_count += 1;
            }
        }

        Ok((ids, created_count))
    }

    /// Finds or creates one resource by URL.
    ///
    /// A failed name fetch stores `UNKNOWN_NAME`; an existing `UNKNOWN_NAME` resource is
    /// renamed once a fetch succeeds.
    async fn resolve_resource(&self, kind: RelationKind, url: &str) -> Result<(i32, bool), DbErr> {
        let repo = ResourceRepository::new(self.db);

        if let Some(existing) = repo.find_by_url(kind, url).await? {
            if existing.name == UNKNOWN_NAME {
                if let Some(name) = self.fetch_name(kind, url).await {
                    repo.rename(kind, existing.id, &name).await?;
                    tracing::info!("Resolved name of {} {} to '{}'", kind, url, name);
                }
            }
            return Ok((existing.id, false));
        }

        let name = self
            .fetch_name(kind, url)
            .await
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());

        let created = repo.insert_or_ignore(kind, &name, url).await?;

        let resource = repo
            .find_by_url(kind, url)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("{} {}", kind, url)))?;

        Ok((resource.id, created))
    }

    async fn fetch_name(&self, kind: RelationKind, url: &str) -> Option<String> {
        match self.source.fetch_resource_name(url).await {
            Ok(name) if !name.trim().is_empty() => Some(name),
            Ok(_) => {
                tracing::warn!("Upstream returned an empty name for {} {}", kind, url);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch name for {} {}: {}", kind, url, e);
                None
            }
        }
    }
}
