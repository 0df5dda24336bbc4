//! Delivery channel module
//!
//! Only the mock (console) sender ships with this service; real
//! provider integrations hang off the same [`SmsSender`] trait when
//! one is added. The factory falls back to the mock with a warning
//! for unknown provider names.

pub mod mock_sms;

#[cfg(test)]
mod tests;

pub use mock_sms::MockSmsSender;

use otp_shared::config::SmsConfig;

/// Create the delivery channel selected by configuration
pub fn create_sms_sender(config: &SmsConfig) -> MockSmsSender {
    match config.provider.as_str() {
        "mock" | "console" => MockSmsSender::new(),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown SMS provider, falling back to mock implementation"
            );
            MockSmsSender::new()
        }
    }
}
