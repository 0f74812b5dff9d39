//! # Blog Core
//!
//! The domain layer of the blog service: the blog post document model,
//! its validation rules, and the storage port the HTTP layer talks to.
//! This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
