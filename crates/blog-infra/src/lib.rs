//! # Blog Infrastructure
//!
//! Concrete implementations of the storage port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM; without it only
//!   the in-memory store is built
//! - `fixtures` - Randomized seed data for test suites

pub mod database;

#[cfg(feature = "fixtures")]
pub mod fixtures;

pub use database::{DatabaseConfig, DatabaseConnections, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresBlogPostRepository;
