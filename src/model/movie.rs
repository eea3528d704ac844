use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Movie as listed in catalog and favorites responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MovieDto {
    pub id: i32,
    #[schema(example = "A New Hope")]
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "1977-05-25")]
    pub release_date: Option<NaiveDate>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub episode_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Movie with every related resource category expanded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MovieDetailDto {
    #[serde(flatten)]
    pub movie: MovieDto,
    pub characters: Vec<ResourceDto>,
    pub planets: Vec<ResourceDto>,
    pub starships: Vec<ResourceDto>,
    pub vehicles: Vec<ResourceDto>,
    pub species: Vec<ResourceDto>,
}

/// A character, planet, starship, vehicle or species.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ResourceDto {
    pub id: i32,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    #[schema(example = "https://swapi.dev/api/people/1/")]
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct CreateMovieDto {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "A New Hope")]
    pub title: String,
    #[validate(length(min = 1))]
    #[schema(example = "It is a period of civil war...")]
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "1977-05-25")]
    pub release_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "George Lucas")]
    pub director: Option<String>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Gary Kurtz, Rick McCallum")]
    pub producer: Option<String>,
    #[validate(range(min = 1))]
    pub episode_id: Option<i32>,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema, Validate)]
pub struct UpdateMovieDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub release_date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub director: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub producer: Option<String>,
    #[validate(range(min = 1))]
    pub episode_id: Option<i32>,
}
