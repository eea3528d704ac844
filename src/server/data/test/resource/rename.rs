use super::*;

/// Tests replacing a placeholder name.
///
/// Expected: Ok with the new name stored
#[tokio::test]
async fn renames_resource() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let url = "https://swapi.dev/api/species/1/";
    let species = factory::create_resource_with::<Species>(db, "Unknown", url).await?;

    let repo = ResourceRepository::new(db);
    repo.rename(RelationKind::Species, species.id, "Human")
        .await?;

    let resource = repo.find_by_url(RelationKind::Species, url).await?.unwrap();
    assert_eq!(resource.name, "Human");

    Ok(())
}
