//! Catalog resource factories.
//!
//! Characters, planets, starships, vehicles and species share one shape, so a
//! single set of generic functions covers all of them:
//!
//! ```rust,ignore
//! let planet = create_resource::<Planet>(&db).await?;
//! link_resource::<Planet>(&db, movie.id, planet.id).await?;
//! ```

use crate::factory::helpers::next_id;
use entity::resource::{CatalogResource, MovieLink};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

/// Creates a resource with a generated name and URL.
///
/// Defaults:
/// - name: `"Resource {id}"`
/// - url: `"https://swapi.test/api/resource/{id}/"`
pub async fn create_resource<R>(db: &DatabaseConnection) -> Result<R::Model, DbErr>
where
    R: CatalogResource,
    R::Model: IntoActiveModel<R::Record>,
{
    let id = next_id();
    create_resource_with::<R>(
        db,
        format!("Resource {}", id),
        format!("https://swapi.test/api/resource/{}/", id),
    )
    .await
}

/// Creates a resource with an explicit name and URL.
pub async fn create_resource_with<R>(
    db: &DatabaseConnection,
    name: impl Into<String>,
    url: impl Into<String>,
) -> Result<R::Model, DbErr>
where
    R: CatalogResource,
    R::Model: IntoActiveModel<R::Record>,
{
    R::record(name.into(), url.into()).insert(db).await
}

/// Links an existing resource to an existing movie.
pub async fn link_resource<R>(
    db: &DatabaseConnection,
    movie_id: i32,
    resource_id: i32,
) -> Result<(), DbErr>
where
    R: CatalogResource,
{
    R::Link::insert(<R::Link as MovieLink>::record(movie_id, resource_id))
        .exec(db)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::movie::create_movie};
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn creates_resources_of_each_kind() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let character = create_resource::<Character>(db).await?;
        let planet = create_resource_with::<Planet>(db, "Tatooine", "/planets/1/").await?;

        assert!(character.url.starts_with("https://swapi.test/"));
        assert_eq!(planet.name, "Tatooine");
        assert_eq!(planet.url, "/planets/1/");

        Ok(())
    }

    #[tokio::test]
    async fn links_resource_to_movie() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let movie = create_movie(db).await?;
        let starship = create_resource::<Starship>(db).await?;

        link_resource::<Starship>(db, movie.id, starship.id).await?;

        let count = MovieStarship::find()
            .filter(entity::movie_starship::Column::MovieId.eq(movie.id))
            .count(db)
            .await?;
        assert_eq!(count, 1);

        Ok(())
    }
}
