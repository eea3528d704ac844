//! Catalog resources and the relation categories that link them to movies.

use std::fmt;

use sea_orm::FromQueryResult;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::model::movie::ResourceDto;

/// A character, planet, starship, vehicle or species.
///
/// All five tables share the `id`, `name`, `url` layout, so rows from any of them
/// are read directly into this model.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    /// Upstream URL, unique per resource table.
    pub url: String,
}

impl Resource {
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            id: self.id,
            name: self.name,
            url: self.url,
        }
    }
}

/// Relation category between a movie and one resource table.
///
/// Deserializes from the lowercase path segment used in
/// `GET /movies/{id}/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Characters,
    Planets,
    Starships,
    Vehicles,
    Species,
}

impl RelationKind {
    pub const ALL: [RelationKind; 5] = [
        RelationKind::Characters,
        RelationKind::Planets,
        RelationKind::Starships,
        RelationKind::Vehicles,
        RelationKind::Species,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Characters => "characters",
            RelationKind::Planets => "planets",
            RelationKind::Starships => "starships",
            RelationKind::Vehicles => "vehicles",
            RelationKind::Species => "species",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resource list per relation category.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationSets<T> {
    pub characters: Vec<T>,
    pub planets: Vec<T>,
    pub starships: Vec<T>,
    pub vehicles: Vec<T>,
    pub species: Vec<T>,
}

impl<T> Default for RelationSets<T> {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            planets: Vec::new(),
            starships: Vec::new(),
            vehicles: Vec::new(),
            species: Vec::new(),
        }
    }
}

impl<T> RelationSets<T> {
    pub fn get(&self, kind: RelationKind) -> &[T] {
        match kind {
            RelationKind::Characters => &self.characters,
            RelationKind::Planets => &self.planets,
            RelationKind::Starships => &self.starships,
            RelationKind::Vehicles => &self.vehicles,
            RelationKind::Species => &self.species,
        }
    }

    pub fn get_mut(&mut self, kind: RelationKind) -> &mut Vec<T> {
        match kind {
            RelationKind::Characters => &mut self.characters,
            RelationKind::Planets => &mut self.planets,
            RelationKind::Starships => &mut self.starships,
            RelationKind::Vehicles => &mut self.vehicles,
            RelationKind::Species => &mut self.species,
        }
    }
}
