//! Movie factory for creating test movie entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test movies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::movie::MovieFactory;
///
/// let movie = MovieFactory::new(&db)
///     .title("The Empire Strikes Back")
///     .episode_id(5)
///     .build()
///     .await?;
/// ```
pub struct MovieFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    release_date: Option<NaiveDate>,
    director: Option<String>,
    producer: Option<String>,
    episode_id: Option<i32>,
}

impl<'a> MovieFactory<'a> {
    /// Creates a new MovieFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Movie {id}"` where id is auto-incremented
    /// - description: `Some("Test opening crawl")`
    /// - director: `Some("Test Director")`
    /// - every other descriptive field: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MovieFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Movie {}", id),
            description: Some("Test opening crawl".to_string()),
            release_date: None,
            director: Some("Test Director".to_string()),
            producer: None,
            episode_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = Some(release_date);
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn producer(mut self, producer: impl Into<String>) -> Self {
        self.producer = Some(producer.into());
        self
    }

    pub fn episode_id(mut self, episode_id: i32) -> Self {
        self.episode_id = Some(episode_id);
        self
    }

    /// Builds and inserts the movie entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::movie::Model)` - Created movie entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::movie::Model, DbErr> {
        let now = Utc::now();
        entity::movie::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            release_date: ActiveValue::Set(self.release_date),
            director: ActiveValue::Set(self.director),
            producer: ActiveValue::Set(self.producer),
            episode_id: ActiveValue::Set(self.episode_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a movie with default values.
///
/// Shorthand for `MovieFactory::new(db).build().await`.
pub async fn create_movie(db: &DatabaseConnection) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).build().await
}

/// Creates a movie with a specific title.
pub async fn create_movie_with_title(
    db: &DatabaseConnection,
    title: impl Into<String>,
) -> Result<entity::movie::Model, DbErr> {
    MovieFactory::new(db).title(title).build().await
}
