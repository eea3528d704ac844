use super::*;

/// Tests updating only the provided fields.
///
/// Expected: Ok(Some) with director changed and other fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::movie::MovieFactory::new(db)
        .title("A New Hope")
        .producer("Gary Kurtz")
        .build()
        .await?;

    let repo = MovieRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateMovieParams {
                director: Some("George Lucas".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.title, "A New Hope");
    assert_eq!(updated.director.as_deref(), Some("George Lucas"));
    assert_eq!(updated.producer.as_deref(), Some("Gary Kurtz"));
    assert_eq!(updated.description, created.description);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests updating a movie that does not exist.
///
/// Expected: Ok(None) and no row written
#[tokio::test]
async fn returns_none_for_missing_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let updated = repo
        .update(
            999,
            UpdateMovieParams {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_none());
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
