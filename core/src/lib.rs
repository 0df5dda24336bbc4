//! # OTP Core
//!
//! Core domain layer for the OTP service. This crate owns the complete
//! passcode lifecycle: generation, hashed-at-rest storage semantics,
//! verification with attempt limiting, single-use invalidation, and
//! expiry. Storage and delivery backends plug in through the
//! [`OtpStore`](services::otp::OtpStore) and
//! [`SmsSender`](services::otp::SmsSender) traits.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
