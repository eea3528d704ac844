use super::*;

/// Tests listing a user's favorites with the movie expanded.
///
/// Expected: Ok with only this user's favorites
#[tokio::test]
async fn returns_only_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let hope = factory::movie::create_movie_with_title(db, "A New Hope").await?;
    let empire = factory::movie::create_movie_with_title(db, "The Empire Strikes Back").await?;

    factory::create_favorite(db, user.id, hope.id).await?;
    factory::create_favorite(db, other.id, empire.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_for_user(user.id).await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].movie.id, hope.id);
    assert_eq!(favorites[0].movie.title, "A New Hope");

    Ok(())
}

/// Tests listing favorites for a user with none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_for_user(user.id).await?;

    assert!(favorites.is_empty());

    Ok(())
}
