//! Shared shape of catalog resources and their movie join tables.
//!
//! Every resource table has `id`, `name` and a unique `url`, and every join
//! table pairs a `movie_id` with a resource id under a composite primary key.
//! The traits expose the columns needed to query them generically.

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};

/// A resource entity referenced by movies through a join table.
pub trait CatalogResource: EntityTrait {
    type Record: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;
    type Link: MovieLink;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn url_column() -> Self::Column;

    /// Builds an unsaved row for insertion.
    fn record(name: String, url: String) -> Self::Record;
}

/// A join table between `movie` and one resource table.
pub trait MovieLink: EntityTrait {
    type Record: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    fn movie_column() -> Self::Column;
    fn resource_column() -> Self::Column;

    fn record(movie_id: i32, resource_id: i32) -> Self::Record;
}
