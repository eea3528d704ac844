//! Request and response DTOs exposed over the HTTP API.
//!
//! These types are the wire contract: they derive `serde` for JSON, `ToSchema` for the
//! OpenAPI document, and `Validate` where they carry user input. Server-side domain
//! models live in `server::model` and convert into these at the controller boundary.

pub mod api;
pub mod favorite;
pub mod movie;
pub mod user;
