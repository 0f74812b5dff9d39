//! # Blog Shared
//!
//! Wire types shared between the API server and its clients.
//! Nothing in here knows about storage; it only describes JSON shapes.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
