//! Catalog synchronization models.
//!
//! `FilmRecord` is the source-agnostic shape of one upstream film; the sync engine only
//! sees these, never the wire format. `SyncReport` summarizes one pass.

use chrono::NaiveDate;

use crate::server::model::resource::RelationSets;

/// One film as reported by the upstream source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilmRecord {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Resource URLs per relation category, in upstream order.
    pub relations: RelationSets<String>,
}

/// Descriptive movie fields merged from a `FilmRecord`.
///
/// Each `Some` overwrites the stored value; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFields {
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
}

impl MovieFields {
    /// Takes the descriptive fields of a film, dropping blank strings so they never
    /// clear a stored value.
    pub fn from_film(film: &FilmRecord) -> Self {
        Self {
            description: non_blank(&film.opening_crawl),
            release_date: film.release_date,
            director: non_blank(&film.director),
            producer: non_blank(&film.producer),
            episode_id: film.episode_id,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Whether a synced movie was inserted or merged into an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieUpsert {
    Created(i32),
    Updated(i32),
}

impl MovieUpsert {
    pub fn id(&self) -> i32 {
        match self {
            MovieUpsert::Created(id) | MovieUpsert::Updated(id) => *id,
        }
    }
}

/// Counters for one synchronization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub movies_created: usize,
    pub movies_updated: usize,
    pub movies_failed: usize,
    pub resources_created: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_dropped() {
        let film = FilmRecord {
            title: "A New Hope".to_string(),
            opening_crawl: Some("   ".to_string()),
            director: Some("George Lucas".to_string()),
            producer: Some(String::new()),
            ..Default::default()
        };

        let fields = MovieFields::from_film(&film);

        assert_eq!(fields.description, None);
        assert_eq!(fields.director.as_deref(), Some("George Lucas"));
        assert_eq!(fields.producer, None);
    }
}
