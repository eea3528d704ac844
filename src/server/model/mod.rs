//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary, services
//! operate on them, and controllers convert them into DTOs with `into_dto()`.

pub mod favorite;
pub mod movie;
pub mod resource;
pub mod sync;
pub mod user;
