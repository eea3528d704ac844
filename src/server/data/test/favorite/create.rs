use super::*;

/// Tests adding a new favorite edge.
///
/// Expected: Ok(true) and the edge exists
#[tokio::test]
async fn creates_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let movie = factory::create_movie(db).await?;

    let repo = FavoriteRepository::new(db);
    let created = repo.create(user.id, movie.id).await?;

    assert!(created);
    assert!(repo.exists(user.id, movie.id).await?);

    Ok(())
}

/// Tests adding a favorite edge that already exists.
///
/// Expected: Ok(false) without an error
#[tokio::test]
async fn returns_false_for_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, movie, _) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let repo = FavoriteRepository::new(db);
    let created = repo.create(user.id, movie.id).await?;

    assert!(!created);

    Ok(())
}

/// Tests adding a favorite for a movie that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.create(user.id, 999).await;

    assert!(result.is_err());

    Ok(())
}
