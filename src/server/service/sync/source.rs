//! Upstream film source.
//!
//! `FilmSource` is the seam between the sync engine and the network. `SwapiClient`
//! implements it against the Star Wars API: the film list is paginated through `next`
//! links, and every request is retried with exponential backoff on transport errors,
//! 5xx and 429 responses.

use std::{collections::HashSet, future::Future, time::Duration};

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::server::{
    error::upstream::UpstreamError,
    model::{resource::RelationSets, sync::FilmRecord},
};

const BASE_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Source of canonical film data.
#[async_trait]
pub trait FilmSource: Send + Sync {
    /// Fetches every film, following pagination.
    async fn fetch_films(&self) -> Result<Vec<FilmRecord>, UpstreamError>;

    /// Fetches the display name of one related resource by its URL.
    async fn fetch_resource_name(&self, url: &str) -> Result<String, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct FilmPage {
    results: Vec<SwapiFilm>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SwapiFilm {
    title: String,
    episode_id: Option<i32>,
    opening_crawl: Option<String>,
    director: Option<String>,
    producer: Option<String>,
    release_date: Option<String>,
    #[serde(default)]
    characters: Vec<String>,
    #[serde(default)]
    planets: Vec<String>,
    #[serde(default)]
    starships: Vec<String>,
    #[serde(default)]
    vehicles: Vec<String>,
    #[serde(default)]
    species: Vec<String>,
}

impl SwapiFilm {
    fn into_record(self) -> FilmRecord {
        let release_date = self.release_date.as_deref().and_then(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|e| {
                    tracing::warn!(
                        "Ignoring unparsable release date '{}' for '{}': {}",
                        raw,
                        self.title,
                        e
                    )
                })
                .ok()
        });

        FilmRecord {
            title: self.title,
            episode_id: self.episode_id,
            opening_crawl: self.opening_crawl,
            director: self.director,
            producer: self.producer,
            release_date,
            relations: RelationSets {
                characters: self.characters,
                planets: self.planets,
                starships: self.starships,
                vehicles: self.vehicles,
                species: self.species,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

/// HTTP client for the Star Wars API.
#[derive(Clone)]
pub struct SwapiClient {
    http: reqwest::Client,
    base_url: Url,
    max_retries: u32,
}

impl SwapiClient {
    /// Creates a new SwapiClient.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client, already configured with the request timeout
    /// - `base_url` - API root ending in `/`, e.g. `https://swapi.dev/api/`
    /// - `max_retries` - Retries after the first attempt of each request
    pub fn new(http: reqwest::Client, base_url: Url, max_retries: u32) -> Self {
        Self {
            http,
            base_url,
            max_retries,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let mut attempt = 0;

        loop {
            match self.try_get_json(url).await {
                Ok(body) => return Ok(body),
                Err(err) if attempt < self.max_retries && is_retryable(&err) => {
                    let delay = retry_delay(attempt);
                    attempt += 1;
                    tracing::warn!(
                        "Retrying {} in {:?} (attempt {}/{}): {}",
                        url,
                        delay,
                        attempt,
                        self.max_retries,
                        err
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let request_err = |source| UpstreamError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(request_err)
    }
}

#[async_trait]
impl FilmSource for SwapiClient {
    async fn fetch_films(&self) -> Result<Vec<FilmRecord>, UpstreamError> {
        let first = self
            .base_url
            .join("films/")
            .map_err(|e| UpstreamError::InvalidUrl(self.base_url.to_string(), e))?;

        let films = collect_pages(first.to_string(), move |url| async move {
            self.get_json::<FilmPage>(&url).await
        })
        .await?;

        tracing::debug!("Fetched {} films from upstream", films.len());

        Ok(films)
    }

    async fn fetch_resource_name(&self, url: &str) -> Result<String, UpstreamError> {
        let resource: NamedResource = self.get_json(url).await?;

        Ok(resource.name)
    }
}

/// Follows `next` links from `first`, stopping at the last page or at a link back to a
/// page already fetched.
async fn collect_pages<F, Fut>(first: String, mut fetch_page: F) -> Result<Vec<FilmRecord>, UpstreamError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<FilmPage, UpstreamError>>,
{
    let mut films = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(first);

    while let Some(url) = next {
        if !visited.insert(url.clone()) {
            tracing::warn!("Upstream pagination loops back to {}, stopping", url);
            break;
        }

        let page = fetch_page(url).await?;
        films.extend(page.results.into_iter().map(SwapiFilm::into_record));
        next = page.next;
    }

    Ok(films)
}

/// Backoff before retry number `attempt + 1`: 500ms doubling, saturating for large counts.
fn retry_delay(attempt: u32) -> Duration {
    BASE_RETRY_DELAY.saturating_mul(2u32.saturating_pow(attempt))
}

/// Transport failures, 5xx and 429 are retried. Other statuses and malformed bodies
/// fail immediately.
fn is_retryable(err: &UpstreamError) -> bool {
    match err {
        UpstreamError::Request { source, .. } => !source.is_decode(),
        UpstreamError::Status { status, .. } => {
            status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
        }
        UpstreamError::InvalidUrl(..) => false,
    }
}
