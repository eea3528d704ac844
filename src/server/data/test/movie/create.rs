use super::*;

/// Tests creating a movie with every field.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_movie() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MovieRepository::new(db);
    let movie = repo
        .create(CreateMovieParams {
            title: "A New Hope".to_string(),
            description: Some("It is a period of civil war.".to_string()),
            release_date: chrono::NaiveDate::from_ymd_opt(1977, 5, 25),
            director: Some("George Lucas".to_string()),
            producer: Some("Gary Kurtz, Rick McCallum".to_string()),
            episode_id: Some(4),
        })
        .await?;

    assert_eq!(movie.title, "A New Hope");
    assert_eq!(movie.director.as_deref(), Some("George Lucas"));
    assert_eq!(
        movie.release_date,
        chrono::NaiveDate::from_ymd_opt(1977, 5, 25)
    );

    let stored = repo.find_by_id(movie.id).await?.unwrap();
    assert_eq!(stored, movie);

    Ok(())
}

/// Tests creating a movie whose title already exists.
///
/// Expected: Err with unique violation
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Movie)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::movie::create_movie_with_title(db, "A New Hope").await?;

    let repo = MovieRepository::new(db);
    let result = repo
        .create(CreateMovieParams {
            title: "A New Hope".to_string(),
            director: Some("Someone Else".to_string()),
            ..Default::default()
        })
        .await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    Ok(())
}
