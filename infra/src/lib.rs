//! # Infrastructure Layer
//!
//! Concrete implementations behind the core seams:
//! - **Store**: sharded in-memory record store (state lives only in
//!   process memory for the lifetime of each record's TTL)
//! - **SMS**: delivery channel implementations; only the mock/console
//!   sender ships with this service

// Re-export core error types for convenience
pub use otp_core::errors::*;

/// Record store implementations
pub mod store;

/// Delivery channel implementations
pub mod sms;
