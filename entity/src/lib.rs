//! SeaORM entity definitions for the movie catalog.
//!
//! One module per table. Catalog resources (characters, planets, starships,
//! vehicles, species) share the [`resource::CatalogResource`] trait so that
//! lookup, insert-or-ignore and relation replacement can be written once.

pub mod prelude;

pub mod access_token;
pub mod character;
pub mod movie;
pub mod movie_character;
pub mod movie_planet;
pub mod movie_species;
pub mod movie_starship;
pub mod movie_vehicle;
pub mod planet;
pub mod resource;
pub mod species;
pub mod starship;
pub mod user;
pub mod user_movie;
pub mod vehicle;
