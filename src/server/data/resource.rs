//! Catalog resource repository.
//!
//! Characters, planets, starships, vehicles and species are stored in five tables with
//! the same layout. The private generic functions below are written once against
//! `CatalogResource`; `ResourceRepository` dispatches to them by `RelationKind`.

use entity::{
    prelude::{Character, Planet, Species, Starship, Vehicle},
    resource::{CatalogResource, MovieLink},
};
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::resource::{RelationKind, Resource};

/// Runs `$body` with `$R` aliased to the resource entity for `$kind`.
macro_rules! with_resource {
    ($kind:expr, $R:ident => $body:expr) => {
        match $kind {
            RelationKind::Characters => {
                type $R = Character;
                $body
            }
            RelationKind::Planets => {
                type $R = Planet;
                $body
            }
            RelationKind::Starships => {
                type $R = Starship;
                $body
            }
            RelationKind::Vehicles => {
                type $R = Vehicle;
                $body
            }
            RelationKind::Species => {
                type $R = Species;
                $body
            }
        }
    };
}

/// Repository for catalog resources and their movie join tables.
pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    /// Creates a new ResourceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a resource by its exact upstream URL.
    ///
    /// # Returns
    /// - `Ok(Some(Resource))` - Resource found
    /// - `Ok(None)` - No resource of this kind with that URL
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_url(
        &self,
        kind: RelationKind,
        url: &str,
    ) -> Result<Option<Resource>, DbErr> {
        with_resource!(kind, R => find_by_url::<R, C>(self.db, url).await)
    }

    /// Inserts a resource unless one with the same URL already exists.
    ///
    /// Concurrent creators of the same URL converge on a single row; re-read with
    /// `find_by_url` to get it.
    ///
    /// # Returns
    /// - `Ok(true)` - Row inserted
    /// - `Ok(false)` - A row with that URL already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_or_ignore(
        &self,
        kind: RelationKind,
        name: &str,
        url: &str,
    ) -> Result<bool, DbErr> {
        with_resource!(kind, R => insert_or_ignore::<R, C>(self.db, name, url).await)
    }

    /// Replaces a resource's display name.
    pub async fn rename(&self, kind: RelationKind, id: i32, name: &str) -> Result<(), DbErr> {
        with_resource!(kind, R => rename::<R, C>(self.db, id, name).await)
    }

    /// Gets the resources of one category linked to a movie, ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<Resource>)` - Linked resources, empty when none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_movie(
        &self,
        kind: RelationKind,
        movie_id: i32,
    ) -> Result<Vec<Resource>, DbErr> {
        with_resource!(kind, R => get_for_movie::<R, C>(self.db, movie_id).await)
    }

    /// Replaces a movie's relation set for one category.
    ///
    /// Deletes every existing join row for the movie in that category and inserts one
    /// row per distinct resource ID. Run inside a transaction so readers never see the
    /// intermediate empty set.
    ///
    /// # Arguments
    /// - `kind` - Relation category to replace
    /// - `movie_id` - Movie whose relation set is replaced
    /// - `resource_ids` - New set; duplicates are collapsed
    ///
    /// # Returns
    /// - `Ok(())` - Relation set replaced
    /// - `Err(DbErr)` - Database error during delete or insert
    pub async fn replace_for_movie(
        &self,
        kind: RelationKind,
        movie_id: i32,
        resource_ids: &[i32],
    ) -> Result<(), DbErr> {
        with_resource!(kind, R => replace_for_movie::<R, C>(self.db, movie_id, resource_ids).await)
    }
}

async fn find_by_url<R, C>(db: &C, url: &str) -> Result<Option<Resource>, DbErr>
where
    R: CatalogResource,
    C: ConnectionTrait,
{
    R::find()
        .filter(R::url_column().eq(url))
        .into_model::<Resource>()
        .one(db)
        .await
}

async fn insert_or_ignore<R, C>(db: &C, name: &str, url: &str) -> Result<bool, DbErr>
where
    R: CatalogResource,
    C: ConnectionTrait,
{
    let result = R::insert(R::record(name.to_string(), url.to_string()))
        .on_conflict(OnConflict::column(R::url_column()).do_nothing().to_owned())
        .exec(db)
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(err) => Err(err),
    }
}

async fn rename<R, C>(db: &C, id: i32, name: &str) -> Result<(), DbErr>
where
    R: CatalogResource,
    C: ConnectionTrait,
{
    R::update_many()
        .col_expr(R::name_column(), Expr::value(name.to_string()))
        .filter(R::id_column().eq(id))
        .exec(db)
        .await?;

    Ok(())
}

async fn get_for_movie<R, C>(db: &C, movie_id: i32) -> Result<Vec<Resource>, DbErr>
where
    R: CatalogResource,
    C: ConnectionTrait,
{
    let resource_ids: Vec<i32> = R::Link::find()
        .select_only()
        .column(<R::Link as MovieLink>::resource_column())
        .filter(<R::Link as MovieLink>::movie_column().eq(movie_id))
        .into_tuple::<i32>()
        .all(db)
        .await?;

    if resource_ids.is_empty() {
        return Ok(Vec::new());
    }

    R::find()
        .filter(R::id_column().is_in(resource_ids))
        .order_by_asc(R::id_column())
        .into_model::<Resource>()
        .all(db)
        .await
}

async fn replace_for_movie<R, C>(db: &C, movie_id: i32, resource_ids: &[i32]) -> Result<(), DbErr>
where
    R: CatalogResource,
    C: ConnectionTrait,
{
    R::Link::delete_many()
        .filter(<R::Link as MovieLink>::movie_column().eq(movie_id))
        .exec(db)
        .await?;

    let mut ids = resource_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Ok(());
    }

    R::Link::insert_many(
        ids.into_iter()
            .map(|resource_id| <R::Link as MovieLink>::record(movie_id, resource_id)),
    )
    .exec(db)
    .await?;

    Ok(())
}
