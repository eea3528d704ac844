use super::*;

/// Tests finding an existing movie.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_existing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::MovieFactory::new(db)
        .title("Return of the Jedi")
        .episode_id(6)
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let movie = repo.find_by_id(created.id).await?;

    assert!(movie.is_some());
    let movie = movie.unwrap();
    assert_eq!(movie.title, "Return of the Jedi");
    assert_eq!(movie.episode_id, Some(6));

    Ok(())
}

/// Tests finding a movie that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let movie = repo.find_by_id(999).await?;

    assert!(movie.is_none());

    Ok(())
}
