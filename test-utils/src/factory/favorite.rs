//! Favorite edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite edge between an existing user and movie.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user marking the favorite
/// - `movie_id` - ID of the favorited movie
///
/// # Returns
/// - `Ok(entity::user_movie::Model)` - Created edge
/// - `Err(DbErr)` - Database error during insert, including duplicate pairs
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    movie_id: i32,
) -> Result<entity::user_movie::Model, DbErr> {
    entity::user_movie::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        movie_id: ActiveValue::Set(movie_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::helpers::create_favorite_with_dependencies};

    #[tokio::test]
    async fn creates_favorite_edge() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, movie, favorite) = create_favorite_with_dependencies(db).await?;

        assert_eq!(favorite.user_id, user.id);
        assert_eq!(favorite.movie_id, movie.id);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_pair() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_favorite_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, movie, _) = create_favorite_with_dependencies(db).await?;

        let result = create_favorite(db, user.id, movie.id).await;

        assert!(result.is_err());

        Ok(())
    }
}
