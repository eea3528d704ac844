//! Movie domain models and parameters.
//!
//! Provides the movie list model, the detail model with its five relation
//! categories expanded, and parameter types for admin create/update operations.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::movie::{CreateMovieDto, MovieDetailDto, MovieDto, UpdateMovieDto},
    server::model::resource::{RelationSets, Resource},
};

/// Movie without its relations.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    /// Unique title, also the match key for catalog synchronization.
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director: Option<String>,
    pub producer: Option<String>,
    /// Recorded from the upstream source. Informational only.
    pub episode_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    /// Converts an entity model to a movie domain model at the repository boundary.
    pub fn from_entity(entity: entity::movie::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            release_date: entity.release_date,
            director: entity.director,
            producer: entity.producer,
            episode_id: entity.episode_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            director: self.director,
            producer: self.producer,
            episode_id: self.episode_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Movie with every relation category loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: Movie,
    pub relations: RelationSets<Resource>,
}

impl MovieDetail {
    pub fn into_dto(self) -> MovieDetailDto {
        let RelationSets {
            characters,
            planets,
            starships,
            vehicles,
            species,
        } = self.relations;

        MovieDetailDto {
            movie: self.movie.into_dto(),
            characters: characters.into_iter().map(Resource::into_dto).collect(),
            planets: planets.into_iter().map(Resource::into_dto).collect(),
            starships: starships.into_iter().map(Resource::into_dto).collect(),
            vehicles: vehicles.into_iter().map(Resource::into_dto).collect(),
            species: species.into_iter().map(Resource::into_dto).collect(),
        }
    }
}

/// Parameters for creating a movie through the admin API.
#[derive(Debug, Clone, Default)]
pub struct CreateMovieParams {
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
}

impl CreateMovieParams {
    pub fn from_dto(dto: CreateMovieDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            release_date: dto.release_date,
            director: dto.director,
            producer: dto.producer,
            episode_id: dto.episode_id,
        }
    }
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovieParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
}

impl UpdateMovieParams {
    pub fn from_dto(dto: UpdateMovieDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            release_date: dto.release_date,
            director: dto.director,
            producer: dto.producer,
            episode_id: dto.episode_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.release_date.is_none()
            && self.director.is_none()
            && self.producer.is_none()
            && self.episode_id.is_none()
    }
}
