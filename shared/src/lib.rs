//! Shared utilities and common types for the OTP service
//!
//! This crate provides functionality used across the server crates:
//! - Configuration types loaded from the environment
//! - API response wrappers
//! - Phone number utilities (validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, OtpConfig, ServerConfig, SmsConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::phone;
