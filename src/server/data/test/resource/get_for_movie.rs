use super::*;

/// Tests reading a movie's resources of one category.
///
/// Expected: Ok with only the linked resources, ordered by ID
#[tokio::test]
async fn returns_linked_resources_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let luke = factory::create_resource::<Character>(db).await?;
    let leia = factory::create_resource::<Character>(db).await?;
    let unlinked = factory::create_resource::<Character>(db).await?;

    factory::link_resource::<Character>(db, movie.id, leia.id).await?;
    factory::link_resource::<Character>(db, movie.id, luke.id).await?;

    let repo = ResourceRepository::new(db);
    let characters = repo
        .get_for_movie(RelationKind::Characters, movie.id)
        .await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![luke.id, leia.id]);
    assert!(!ids.contains(&unlinked.id));

    Ok(())
}

/// Tests that categories do not leak into each other.
///
/// Expected: Ok with empty vector for a category with no links
#[tokio::test]
async fn returns_empty_for_unlinked_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let ship = factory::create_resource::<Starship>(db).await?;
    factory::link_resource::<Starship>(db, movie.id, ship.id).await?;

    let repo = ResourceRepository::new(db);
    let vehicles = repo.get_for_movie(RelationKind::Vehicles, movie.id).await?;
    let starships = repo.get_for_movie(RelationKind::Starships, movie.id).await?;

    assert!(vehicles.is_empty());
    assert_eq!(starships.len(), 1);

    Ok(())
}
