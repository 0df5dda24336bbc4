//! OTP service module: the complete passcode lifecycle
//!
//! This module provides:
//! - Cryptographically secure passcode generation
//! - Issuance with atomic replacement of prior challenges
//! - Verification with constant-time comparison, attempt limiting,
//!   single-use invalidation, and lazy expiry
//! - A background sweep task that reclaims dead records

mod config;
mod generator;
mod service;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use generator::CodeGenerator;
pub use service::OtpService;
pub use sweeper::{OtpSweeper, SweeperConfig, SweeperHandle};
pub use traits::{OtpStore, SmsSender};
pub use types::IssueReceipt;
