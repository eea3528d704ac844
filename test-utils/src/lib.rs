//! Movie Catalog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the movie
//! catalog backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! Entity factories live under [`factory`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Movie;
//!
//! #[tokio::test]
//! async fn test_movie_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Movie)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
