//! Configuration for the OTP service

use crate::domain::entities::otp_record::{CODE_LENGTH, DEFAULT_TTL_MINUTES, MAX_ATTEMPTS};

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of digits in a generated passcode
    pub code_length: usize,
    /// Minutes until an issued passcode expires
    pub ttl_minutes: i64,
    /// Maximum number of failed verification attempts allowed
    pub max_attempts: u32,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            ttl_minutes: DEFAULT_TTL_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl From<&otp_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: &otp_shared::config::OtpConfig) -> Self {
        Self {
            code_length: config.code_length,
            ttl_minutes: config.ttl_minutes,
            max_attempts: config.max_attempts,
        }
    }
}
