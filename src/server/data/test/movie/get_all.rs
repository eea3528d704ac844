use super::*;

/// Tests listing movies from an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_movies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let movies = repo.get_all().await?;

    assert!(movies.is_empty());

    Ok(())
}

/// Tests listing movies returns every movie ordered by ID.
///
/// Expected: Ok with movies in insertion order
#[tokio::test]
async fn returns_all_movies_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::movie::create_movie_with_title(db, "A New Hope").await?;
    let second = factory::movie::create_movie_with_title(db, "The Empire Strikes Back").await?;

    let repo = MovieRepository::new(db);
    let movies = repo.get_all().await?;

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, first.id);
    assert_eq!(movies[1].id, second.id);
    assert_eq!(movies[1].title, "The Empire Strikes Back");

    Ok(())
}
