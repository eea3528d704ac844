//! HTTP request handlers.
//!
//! Each handler runs its `AuthGuard` first, validates the request body, converts DTOs
//! into service parameters, and converts the service result back into a DTO.

pub mod auth;
pub mod favorite;
pub mod health;
pub mod movie;
pub mod user;

#[cfg(test)]
mod test;
