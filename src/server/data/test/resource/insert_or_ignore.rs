use super::*;

/// Tests inserting a resource with a new URL.
///
/// Expected: Ok(true) and the resource is findable by URL
#[tokio::test]
async fn inserts_new_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);
    let url = "https://swapi.dev/api/people/1/";
    let inserted = repo
        .insert_or_ignore(RelationKind::Characters, "Luke Skywalker", url)
        .await?;

    assert!(inserted);
    let resource = repo.find_by_url(RelationKind::Characters, url).await?;
    assert!(resource.is_some());
    assert_eq!(resource.unwrap().name, "Luke Skywalker");

    Ok(())
}

/// Tests inserting a resource whose URL already exists.
///
/// Expected: Ok(false) and the original row is kept
#[tokio::test]
async fn ignores_existing_url() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let url = "https://swapi.dev/api/planets/1/";
    let existing = factory::create_resource_with::<Planet>(db, "Tatooine", url).await?;

    let repo = ResourceRepository::new(db);
    let inserted = repo
        .insert_or_ignore(RelationKind::Planets, "Unknown", url)
        .await?;

    assert!(!inserted);
    let resource = repo.find_by_url(RelationKind::Planets, url).await?.unwrap();
    assert_eq!(resource.id, existing.id);
    assert_eq!(resource.name, "Tatooine");

    Ok(())
}

/// Tests that the same URL may exist once per resource table.
///
/// Expected: Ok(true) for both kinds
#[tokio::test]
async fn url_uniqueness_is_per_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResourceRepository::new(db);
    let url = "https://swapi.dev/api/shared/1/";

    assert!(
        repo.insert_or_ignore(RelationKind::Starships, "X-wing", url)
            .await?
    );
    assert!(
        repo.insert_or_ignore(RelationKind::Vehicles, "Sand Crawler", url)
            .await?
    );

    Ok(())
}
