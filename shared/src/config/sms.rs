//! Delivery channel configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Delivery channel configuration
///
/// Only the mock (console) provider ships with this service; the
/// provider field exists so deployments can select a real gateway
/// once one is integrated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Delivery provider name ("mock" is the only built-in)
    pub provider: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
        }
    }
}

impl SmsConfig {
    /// Load delivery configuration from `SMS_PROVIDER`
    pub fn from_env() -> Self {
        Self {
            provider: env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
        }
    }
}
