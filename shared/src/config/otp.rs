//! Passcode lifecycle configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the passcode lifecycle: generation, expiry,
/// attempt limiting, and background sweeping.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of digits in a generated passcode
    pub code_length: usize,

    /// Minutes until an issued passcode expires
    pub ttl_minutes: i64,

    /// Maximum number of failed verification attempts per passcode
    pub max_attempts: u32,

    /// Seconds between background sweep cycles
    pub sweep_interval_seconds: u64,

    /// Whether the background sweep task runs at all. Expiry is also
    /// enforced lazily on access, so disabling the sweep only affects
    /// memory usage, never correctness.
    pub sweep_enabled: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            ttl_minutes: 5,
            max_attempts: 5,
            sweep_interval_seconds: 60,
            sweep_enabled: true,
        }
    }
}

impl OtpConfig {
    /// Load passcode configuration from the environment
    ///
    /// Recognized variables: `OTP_CODE_LENGTH`, `OTP_TTL_MINUTES`,
    /// `OTP_MAX_ATTEMPTS`, `OTP_SWEEP_INTERVAL_SECONDS`, `OTP_SWEEP_ENABLED`.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        Ok(Self {
            code_length: parse_var("OTP_CODE_LENGTH", defaults.code_length)?,
            ttl_minutes: parse_var("OTP_TTL_MINUTES", defaults.ttl_minutes)?,
            max_attempts: parse_var("OTP_MAX_ATTEMPTS", defaults.max_attempts)?,
            sweep_interval_seconds: parse_var(
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            )?,
            sweep_enabled: parse_var("OTP_SWEEP_ENABLED", defaults.sweep_enabled)?,
        })
    }

    /// Reject configurations the store cannot honor
    pub fn validate(&self) -> Result<(), String> {
        if self.code_length < 4 || self.code_length > 9 {
            return Err(format!(
                "OTP_CODE_LENGTH must be between 4 and 9, got {}",
                self.code_length
            ));
        }
        if self.ttl_minutes <= 0 {
            return Err(format!(
                "OTP_TTL_MINUTES must be positive, got {}",
                self.ttl_minutes
            ));
        }
        if self.max_attempts == 0 {
            return Err("OTP_MAX_ATTEMPTS must be at least 1".to_string());
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| format!("{} has an invalid value: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
