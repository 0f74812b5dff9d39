//! Observability module - request IDs carried into tracing spans.

mod request_id;

pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware};
