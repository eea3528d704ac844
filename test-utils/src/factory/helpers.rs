//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique titles, emails and URLs across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a movie and a favorite edge between them.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, movie, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_favorite_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::movie::Model,
        entity::user_movie::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let movie = crate::factory::movie::create_movie(db).await?;
    let favorite = crate::factory::favorite::create_favorite(db, user.id, movie.id).await?;

    Ok((user, movie, favorite))
}
