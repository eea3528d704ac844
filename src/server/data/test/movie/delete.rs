use super::*;

/// Tests deleting an existing movie.
///
/// Expected: Ok(true) and movie no longer found
#[tokio::test]
async fn deletes_existing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::movie::create_movie(db).await?;

    let repo = MovieRepository::new(db);
    let deleted = repo.delete(movie.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(movie.id).await?.is_none());

    Ok(())
}

/// Tests deleting a movie that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting a movie cascades to its favorites.
///
/// Expected: Ok(true) and the user's favorite edge removed
#[tokio::test]
async fn cascades_to_favorites() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, movie, _) = factory::helpers::create_favorite_with_dependencies(db).await?;

    let repo = MovieRepository::new(db);
    repo.delete(movie.id).await?;

    let edges = entity::prelude::UserMovie::find().count(db).await?;
    assert_eq!(edges, 0);

    Ok(())
}
