//! Movie data repository for database operations.
//!
//! Provides the `MovieRepository` for catalog reads, admin writes, and the title-keyed
//! merge used by catalog synchronization.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    movie::{CreateMovieParams, Movie, UpdateMovieParams},
    sync::{MovieFields, MovieUpsert},
};

/// Repository providing database operations for movies.
///
/// Generic over the connection so the same queries run against the pool or inside
/// a transaction.
pub struct MovieRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MovieRepository<'a, C> {
    /// Creates a new MovieRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `MovieRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every movie ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Movie>)` - All movies, empty when the catalog is empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Movie>, DbErr> {
        let entities = entity::prelude::Movie::find()
            .order_by_asc(entity::movie::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Movie::from_entity).collect())
    }

    /// Finds a movie by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Movie))` - Movie found
    /// - `Ok(None)` - No movie with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DbErr> {
        let entity = entity::prelude::Movie::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Movie::from_entity))
    }

    /// Finds a movie by its exact title.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, DbErr> {
        let entity = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Title.eq(title))
            .one(self.db)
            .await?;

        Ok(entity.map(Movie::from_entity))
    }

    /// Checks if a movie with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Movie::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Inserts a new movie.
    ///
    /// # Arguments
    /// - `params` - Title and descriptive fields
    ///
    /// # Returns
    /// - `Ok(Movie)` - The created movie
    /// - `Err(DbErr)` - Database error, including a unique violation on the title
    pub async fn create(&self, params: CreateMovieParams) -> Result<Movie, DbErr> {
        let now = Utc::now();
        let entity = entity::movie::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            release_date: ActiveValue::Set(params.release_date),
            director: ActiveValue::Set(params.director),
            producer: ActiveValue::Set(params.producer),
            episode_id: ActiveValue::Set(params.episode_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Movie::from_entity(entity))
    }

    /// Applies a partial update to a movie.
    ///
    /// Only fields set in `params` change. Returns `None` without writing when the
    /// movie does not exist.
    ///
    /// # Returns
    /// - `Ok(Some(Movie))` - Updated movie
    /// - `Ok(None)` - No movie with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on the title
    pub async fn update(&self, id: i32, params: UpdateMovieParams) -> Result<Option<Movie>, DbErr> {
        let Some(entity) = entity::prelude::Movie::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::movie::ActiveModel = entity.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(release_date) = params.release_date {
            active.release_date = ActiveValue::Set(Some(release_date));
        }
        if let Some(director) = params.director {
            active.director = ActiveValue::Set(Some(director));
        }
        if let Some(producer) = params.producer {
            active.producer = ActiveValue::Set(Some(producer));
        }
        if let Some(episode_id) = params.episode_id {
            active.episode_id = ActiveValue::Set(Some(episode_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Movie::from_entity(entity)))
    }

    /// Deletes a movie by ID. Join rows and favorites cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No movie with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Movie::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Creates or merges a movie keyed by title.
    ///
    /// A new movie takes every provided field. An existing movie only has the fields
    /// overwritten for which `fields` carries a value; nothing is ever cleared.
    ///
    /// # Returns
    /// - `Ok(MovieUpsert::Created(id))` - Inserted a new movie
    /// - `Ok(MovieUpsert::Updated(id))` - Merged into the existing movie
    /// - `Err(DbErr)` - Database error during lookup or write
    pub async fn upsert_by_title(
        &self,
        title: &str,
        fields: MovieFields,
    ) -> Result<MovieUpsert, DbErr> {
        let existing = entity::prelude::Movie::find()
            .filter(entity::movie::Column::Title.eq(title))
            .one(self.db)
            .await?;

        let now = Utc::now();

        let Some(existing) = existing else {
            let entity = entity::movie::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(fields.description),
                release_date: ActiveValue::Set(fields.release_date),
                director: ActiveValue::Set(fields.director),
                producer: ActiveValue::Set(fields.producer),
                episode_id: ActiveValue::Set(fields.episode_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            return Ok(MovieUpsert::Created(entity.id));
        };

        let id = existing.id;
        let mut active: entity::movie::ActiveModel = existing.into();

        if let Some(description) = fields.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(release_date) = fields.release_date {
            active.release_date = ActiveValue::Set(Some(release_date));
        }
        if let Some(director) = fields.director {
            active.director = ActiveValue::Set(Some(director));
        }
        if let Some(producer) = fields.producer {
            active.producer = ActiveValue::Set(Some(producer));
        }
        if let Some(episode_id) = fields.episode_id {
            active.episode_id = ActiveValue::Set(Some(episode_id));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await?;

        Ok(MovieUpsert::Updated(id))
    }
}
