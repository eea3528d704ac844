pub use super::access_token::Entity as AccessToken;
pub use super::character::Entity as Character;
pub use super::movie::Entity as Movie;
pub use super::movie_character::Entity as MovieCharacter;
pub use super::movie_planet::Entity as MoviePlanet;
pub use super::movie_species::Entity as MovieSpecies;
pub use super::movie_starship::Entity as MovieStarship;
pub use super::movie_vehicle::Entity as MovieVehicle;
pub use super::planet::Entity as Planet;
pub use super::species::Entity as Species;
pub use super::starship::Entity as Starship;
pub use super::user::Entity as User;
pub use super::user_movie::Entity as UserMovie;
pub use super::vehicle::Entity as Vehicle;
