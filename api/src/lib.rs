//! HTTP transport adapter for the OTP service
//!
//! Maps `POST /send-otp` and `POST /verify-otp` onto the core issue
//! and verify operations. All lifecycle outcomes surface as `400`
//! responses whose `error` field names the kind; the plaintext code
//! never appears in any response body.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
