//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and the upstream source
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Saving a synced movie and its relation sets atomically

pub mod favorite;
pub mod movie;
pub mod sync;
pub mod user;
