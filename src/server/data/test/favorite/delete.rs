use super::*;

/// Tests removing an existing favorite.
///
/// Expected: Ok(true) and the edge is gone
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, movie, _) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(user.id, movie.id).await?;

    assert!(deleted);
    assert!(!repo.exists(user.id, movie.id).await?);

    Ok(())
}

/// Tests removing a favorite that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;

    let repo = FavoriteRepository::new(db);
    let deleted = repo.delete(user.id, movie.id).await?;

    assert!(!deleted);

    Ok(())
}
