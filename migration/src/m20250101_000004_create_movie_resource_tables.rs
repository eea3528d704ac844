use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250101_000002_create_movie_table::Movie,
    m20250101_000003_create_resource_tables::{Resource, ResourceTable},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for link in MovieLink::ALL {
            let (table, column, resource) = link.parts();

            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(integer(MovieLinkColumn::MovieId))
                        .col(integer(column))
                        .primary_key(Index::create().col(MovieLinkColumn::MovieId).col(column))
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{}_movie_id", table.to_string()))
                                .from(table, MovieLinkColumn::MovieId)
                                .to(Movie::Table, Movie::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(format!("fk_{}_{}", table.to_string(), column.to_string()))
                                .from(table, column)
                                .to(resource, Resource::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for link in MovieLink::ALL {
            let (table, _, _) = link.parts();
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
pub enum MovieLink {
    MovieCharacter,
    MoviePlanet,
    MovieStarship,
    MovieVehicle,
    MovieSpecies,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum MovieLinkColumn {
    MovieId,
    CharacterId,
    PlanetId,
    StarshipId,
    VehicleId,
    SpeciesId,
}

impl MovieLink {
    pub const ALL: [MovieLink; 5] = [
        MovieLink::MovieCharacter,
        MovieLink::MoviePlanet,
        MovieLink::MovieStarship,
        MovieLink::MovieVehicle,
        MovieLink::MovieSpecies,
    ];

    /// Join table, its resource column, and the resource table it points at.
    fn parts(self) -> (MovieLink, MovieLinkColumn, ResourceTable) {
        match self {
            MovieLink::MovieCharacter => (
                self,
                MovieLinkColumn::CharacterId,
                ResourceTable::Character,
            ),
            MovieLink::MoviePlanet => (self, MovieLinkColumn::PlanetId, ResourceTable::Planet),
            MovieLink::MovieStarship => {
                (self, MovieLinkColumn::StarshipId, ResourceTable::Starship)
            }
            MovieLink::MovieVehicle => (self, MovieLinkColumn::VehicleId, ResourceTable::Vehicle),
            MovieLink::MovieSpecies => (self, MovieLinkColumn::SpeciesId, ResourceTable::Species),
        }
    }
}
