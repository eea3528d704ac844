//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Catalog repositories are generic over `ConnectionTrait` so the sync engine can run them
//! inside a transaction.

pub mod access_token;
pub mod favorite;
pub mod movie;
pub mod resource;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether a database error is a unique or primary key violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
