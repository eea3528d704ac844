//! Favorites manager.
//!
//! Adds and removes `user_movie` edges. Both operations succeed when the edge is
//! already in the requested state and report which case applied through
//! `FavoriteOutcome`. Concurrent adds of the same pair are settled by the composite
//! primary key.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{favorite::FavoriteRepository, movie::MovieRepository, user::UserRepository},
    error::AppError,
    model::favorite::{Favorite, FavoriteOutcome},
    service::movie::movie_not_found,
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a movie as a favorite of a user.
    ///
    /// # Returns
    /// - `Ok(FavoriteOutcome::Added)` - Edge created
    /// - `Ok(FavoriteOutcome::AlreadyFavorite)` - Edge already existed, or a concurrent
    ///   add created it first
    /// - `Err(AppError::NotFound)` - User or movie does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_favorite(
        &self,
        user_id: i32,
        movie_id: i32,
    ) -> Result<FavoriteOutcome, AppError> {
        self.ensure_user(user_id).await?;

        if !MovieRepository::new(self.db).exists(movie_id).await? {
            return Err(movie_not_found(movie_id));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.exists(user_id, movie_id).await? {
            return Ok(FavoriteOutcome::AlreadyFavorite);
        }

        if repo.create(user_id, movie_id).await? {
            tracing::debug!("User {} added movie {} to favorites", user_id, movie_id);
            Ok(FavoriteOutcome::Added)
        } else {
            Ok(FavoriteOutcome::AlreadyFavorite)
        }
    }

    /// Removes a movie from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteOutcome::Removed)` - Edge deleted
    /// - `Ok(FavoriteOutcome::NotInFavorites)` - No edge existed, or a concurrent
    ///   remove deleted it first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        movie_id: i32,
    ) -> Result<FavoriteOutcome, AppError> {
        let repo = FavoriteRepository::new(self.db);

        if !repo.exists(user_id, movie_id).await? {
            return Ok(FavoriteOutcome::NotInFavorites);
        }

        if repo.delete(user_id, movie_id).await? {
            tracing::debug!("User {} removed movie {} from favorites", user_id, movie_id);
            Ok(FavoriteOutcome::Removed)
        } else {
            Ok(FavoriteOutcome::NotInFavorites)
        }
    }

    /// Gets every favorite of a user, oldest first, with the movie expanded.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites, empty when none
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        self.ensure_user(user_id).await?;

        Ok(FavoriteRepository::new(self.db)
            .get_for_user(user_id)
            .await?)
    }

    async fn ensure_user(&self, user_id: i32) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))
    }
}
