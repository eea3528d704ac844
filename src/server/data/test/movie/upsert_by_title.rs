use super::*;

/// Tests upserting a title that does not exist yet.
///
/// Expected: Ok(Created) with the provided fields stored
#[tokio::test]
async fn creates_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let result = repo
        .upsert_by_title(
            "A New Hope",
            MovieFields {
                director: Some("George Lucas".to_string()),
                episode_id: Some(4),
                ..Default::default()
            },
        )
        .await?;

    assert!(matches!(result, MovieUpsert::Created(_)));
    let movie = repo.find_by_id(result.id()).await?.unwrap();
    assert_eq!(movie.title, "A New Hope");
    assert_eq!(movie.director.as_deref(), Some("George Lucas"));
    assert_eq!(movie.episode_id, Some(4));

    Ok(())
}

/// Tests merging into an existing movie never clears stored fields.
///
/// Expected: Ok(Updated) with provided fields overwritten and absent fields kept
#[tokio::test]
async fn merges_without_clearing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::movie::MovieFactory::new(db)
        .title("A New Hope")
        .director("Old Director")
        .producer("Gary Kurtz")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let result = repo
        .upsert_by_title(
            "A New Hope",
            MovieFields {
                director: Some("George Lucas".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(result, MovieUpsert::Updated(existing.id));
    let movie = repo.find_by_id(existing.id).await?.unwrap();
    assert_eq!(movie.director.as_deref(), Some("George Lucas"));
    assert_eq!(movie.producer.as_deref(), Some("Gary Kurtz"));
    assert_eq!(movie.description, existing.description);

    Ok(())
}

/// Tests repeated upserts of one title keep a single row.
///
/// Expected: one movie after two upserts
#[tokio::test]
async fn repeated_upsert_keeps_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let first = repo
        .upsert_by_title("A New Hope", MovieFields::default())
        .await?;
    let second = repo
        .upsert_by_title("A New Hope", MovieFields::default())
        .await?;

    assert_eq!(first.id(), second.id());
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
