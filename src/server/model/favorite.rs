//! Favorite edges and the outcomes of toggling them.

use chrono::{DateTime, Utc};

use crate::{
    model::{api::MessageDto, favorite::FavoriteDto},
    server::model::movie::Movie,
};

/// A user's favorite with the movie expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub movie: Movie,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn from_entity(edge: entity::user_movie::Model, movie: entity::movie::Model) -> Self {
        Self {
            movie: Movie::from_entity(movie),
            created_at: edge.created_at,
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            movie: self.movie.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// Result of adding or removing a favorite.
///
/// Every variant is a success. Repeating an add or a remove is informational,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyFavorite,
    Removed,
    NotInFavorites,
}

impl FavoriteOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            FavoriteOutcome::Added => "Movie added to favorites",
            FavoriteOutcome::AlreadyFavorite => "Movie is already in favorites",
            FavoriteOutcome::Removed => "Movie removed from favorites",
            FavoriteOutcome::NotInFavorites => "Movie was not in favorites",
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            message: self.message().to_string(),
        }
    }
}
