//! Configuration module with service-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `otp` - Passcode lifecycle configuration (TTL, attempts, sweep)
//! - `server` - HTTP server bind configuration
//! - `sms` - Delivery channel configuration

pub mod otp;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Passcode lifecycle configuration
    pub otp: OtpConfig,

    /// Delivery channel configuration
    #[serde(default)]
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, String> {
        let config = Self {
            server: ServerConfig::from_env()?,
            otp: OtpConfig::from_env()?,
            sms: SmsConfig::from_env(),
        };
        config.otp.validate()?;
        Ok(config)
    }
}
