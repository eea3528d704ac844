//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let movie = factory::movie::create_movie(&db).await?;
//!     factory::favorite::create_favorite(&db, user.id, movie.id).await?;
//!
//!     // Or all at once
//!     let (user, movie, favorite) =
//!         factory::helpers::create_favorite_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let movie = factory::movie::MovieFactory::new(&db)
//!     .title("A New Hope")
//!     .director("George Lucas")
//!     .build()
//!     .await?;
//!
//! let luke = factory::resource::create_resource_with::<Character>(
//!     &db,
//!     "Luke Skywalker",
//!     "https://swapi.dev/api/people/1/",
//! )
//! .await?;
//! factory::resource::link_resource::<Character>(&db, movie.id, luke.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `movie` - Create movie entities
//! - `resource` - Create catalog resources of any kind and link them to movies
//! - `favorite` - Create user/movie favorite edges
//! - `access_token` - Create bearer tokens
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod access_token;
pub mod favorite;
pub mod helpers;
pub mod movie;
pub mod resource;
pub mod user;

pub use access_token::{create_expired_token, create_token};
pub use favorite::create_favorite;
pub use movie::create_movie;
pub use resource::{create_resource, create_resource_with, link_resource};
pub use user::{create_admin, create_user};
