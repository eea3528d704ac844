use super::*;

/// Tests replacing a relation set removes links not in the new set.
///
/// Expected: Ok with exactly the new set linked
#[tokio::test]
async fn replaces_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let old = factory::create_resource::<Vehicle>(db).await?;
    let new = factory::create_resource::<Vehicle>(db).await?;
    factory::link_resource::<Vehicle>(db, movie.id, old.id).await?;

    let repo = ResourceRepository::new(db);
    repo.replace_for_movie(RelationKind::Vehicles, movie.id, &[new.id])
        .await?;

    let vehicles = repo.get_for_movie(RelationKind::Vehicles, movie.id).await?;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].id, new.id);

    Ok(())
}

/// Tests that duplicate IDs in the new set collapse to one link.
///
/// Expected: Ok with a single link
#[tokio::test]
async fn collapses_duplicate_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let planet = factory::create_resource::<Planet>(db).await?;

    let repo = ResourceRepository::new(db);
    repo.replace_for_movie(
        RelationKind::Planets,
        movie.id,
        &[planet.id, planet.id, planet.id],
    )
    .await?;

    let planets = repo.get_for_movie(RelationKind::Planets, movie.id).await?;
    assert_eq!(planets.len(), 1);

    Ok(())
}

/// Tests replacing with an empty set clears the category.
///
/// Expected: Ok with no links left and the resource row kept
#[tokio::test]
async fn empty_set_clears_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let species = factory::create_resource::<Species>(db).await?;
    factory::link_resource::<Species>(db, movie.id, species.id).await?;

    let repo = ResourceRepository::new(db);
    repo.replace_for_movie(RelationKind::Species, movie.id, &[])
        .await?;

    assert!(repo
        .get_for_movie(RelationKind::Species, movie.id)
        .await?
        .is_empty());
    assert!(repo
        .find_by_url(RelationKind::Species, &species.url)
        .await?
        .is_some());

    Ok(())
}
