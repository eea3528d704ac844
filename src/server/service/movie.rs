//! Catalog query service.
//!
//! Read paths for movies with relation expansion plus the admin write paths. Title
//! uniqueness is pre-checked for a friendly message and enforced by the unique index.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, movie::MovieRepository, resource::ResourceRepository},
    error::AppError,
    model::{
        movie::{CreateMovieParams, Movie, MovieDetail, UpdateMovieParams},
        resource::{RelationKind, RelationSets, Resource},
    },
};

pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every movie in list view, ordered by ID.
    pub async fn find_all(&self) -> Result<Vec<Movie>, AppError> {
        Ok(MovieRepository::new(self.db).get_all().await?)
    }

    /// Gets one movie with all five relation categories expanded.
    ///
    /// # Returns
    /// - `Ok(MovieDetail)` - Movie and its relations
    /// - `Err(AppError::NotFound)` - No movie with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<MovieDetail, AppError> {
        let movie = MovieRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| movie_not_found(id))?;

        let resource_repo = ResourceRepository::new(self.db);
        let mut relations = RelationSets::default();
        for kind in RelationKind::ALL {
            *relations.get_mut(kind) = resource_repo.get_for_movie(kind, id).await?;
        }

        Ok(MovieDetail { movie, relations })
    }

    /// Creates a movie.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The created movie
    /// - `Err(AppError::Conflict)` - A movie with the same title exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateMovieParams) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db);

        if repo.find_by_title(&params.title).await?.is_some() {
            return Err(title_conflict(&params.title));
        }

        let title = params.title.clone();
        repo.create(params).await.map_err(|err| {
            if is_unique_violation(&err) {
                title_conflict(&title)
            } else {
                err.into()
            }
        })
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Movie)` - The updated movie
    /// - `Err(AppError::NotFound)` - No movie with that ID; nothing is written
    /// - `Err(AppError::Conflict)` - The new title belongs to another movie
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, id: i32, params: UpdateMovieParams) -> Result<Movie, AppError> {
        let repo = MovieRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(movie_not_found(id));
        }

        if let Some(title) = params.title.as_deref() {
            if let Some(other) = repo.find_by_title(title).await? {
                if other.id != id {
                    return Err(title_conflict(title));
                }
            }
        }

        let title = params.title.clone();
        let updated = repo.update(id, params).await.map_err(|err| {
            if is_unique_violation(&err) {
                title_conflict(title.as_deref().unwrap_or_default())
            } else {
                AppError::from(err)
            }
        })?;

        // Deleted between the existence check and the write.
        updated.ok_or_else(|| movie_not_found(id))
    }

    /// Deletes a movie. Returns whether a row was removed.
    pub async fn remove(&self, id: i32) -> Result<bool, AppError> {
        Ok(MovieRepository::new(self.db).delete(id).await?)
    }

    /// Gets exactly one relation category of a movie.
    ///
    /// # Returns
    /// - `Ok(Vec<Resource>)` - Resources of that category, ordered by ID
    /// - `Err(AppError::NotFound)` - No movie with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_relation(
        &self,
        movie_id: i32,
        kind: RelationKind,
    ) -> Result<Vec<Resource>, AppError> {
        if !MovieRepository::new(self.db).exists(movie_id).await? {
            return Err(movie_not_found(movie_id));
        }

        Ok(ResourceRepository::new(self.db)
            .get_for_movie(kind, movie_id)
            .await?)
    }
}

pub(crate) fn movie_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Movie with ID {} not found", id))
}

fn title_conflict(title: &str) -> AppError {
    AppError::Conflict(format!("Movie with title '{}' already exists", title))
}
