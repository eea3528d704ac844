use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::movie::MovieDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct AddFavoriteDto {
    #[validate(range(min = 1))]
    #[schema(example = 1)]
    pub movie_id: i32,
}

/// A favorite edge with its movie expanded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FavoriteDto {
    pub movie: MovieDto,
    pub created_at: DateTime<Utc>,
}
