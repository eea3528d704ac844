//! Favorite edge repository.
//!
//! The `user_movie` table's composite primary key is the uniqueness constraint on
//! `(user_id, movie_id)`; inserts that lose a race surface as a unique violation.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::is_unique_violation, model::favorite::Favorite};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user has favorited a movie.
    pub async fn exists(&self, user_id: i32, movie_id: i32) -> Result<bool, DbErr> {
        let edge = entity::prelude::UserMovie::find_by_id((user_id, movie_id))
            .one(self.db)
            .await?;

        Ok(edge.is_some())
    }

    /// Inserts a favorite edge.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge inserted
    /// - `Ok(false)` - The edge already existed (unique violation on insert)
    /// - `Err(DbErr)` - Any other database error, including foreign key violations
    pub async fn create(&self, user_id: i32, movie_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserMovie::insert(entity::user_movie::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            movie_id: ActiveValue::Set(movie_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_without_returning(self.db)
        .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Deletes a favorite edge.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge deleted
    /// - `Ok(false)` - No edge existed, possibly removed concurrently
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, movie_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserMovie::delete_by_id((user_id, movie_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets every favorite of a user with the movie expanded, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites, empty when none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        let rows = entity::prelude::UserMovie::find()
            .filter(entity::user_movie::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_movie::Column::CreatedAt)
            .order_by_asc(entity::user_movie::Column::MovieId)
            .find_also_related(entity::prelude::Movie)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(edge, movie)| movie.map(|movie| Favorite::from_entity(edge, movie)))
            .collect())
    }
}
