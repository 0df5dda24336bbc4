//! Common type definitions shared across crates

pub mod response;

pub use response::{ApiResponse, ErrorResponse};
