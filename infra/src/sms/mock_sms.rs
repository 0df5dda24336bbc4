//! Mock delivery channel implementation
//!
//! Logs passcodes to the console instead of sending them, validates
//! phone numbers, and tracks sent messages so tests can observe the
//! delivery side of the fire-and-forget path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::errors::{OtpError, OtpResult};
use otp_core::services::otp::SmsSender;
use otp_shared::utils::phone::{is_valid_e164, mask_phone_number};

/// One message accepted by the mock channel
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub phone: String,
    pub code: String,
    pub message_id: String,
}

/// Mock delivery channel for development and testing
#[derive(Clone, Default)]
pub struct MockSmsSender {
    /// Messages accepted so far, observable from tests
    sent: Arc<Mutex<Vec<SentMessage>>>,
    /// Counter for tracking the number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate transport failures (for testing)
    simulate_failure: bool,
}

impl MockSmsSender {
    /// Create a new mock delivery channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock channel that fails every delivery
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Snapshot of every accepted message
    pub fn sent_messages(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The most recently accepted message, if any
    pub fn last_message(&self) -> Option<SentMessage> {
        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn deliver(&self, phone: &str, code: &str) -> OtpResult<String> {
        if !is_valid_e164(phone) {
            // The store treats phone numbers as opaque; the channel is
            // where format actually matters for routing.
            warn!(
                phone = %mask_phone_number(phone),
                event = "sms_invalid_destination",
                "Mock channel refusing non-E.164 destination"
            );
            return Err(OtpError::Delivery {
                message: "invalid destination phone number".to_string(),
            });
        }

        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(phone),
                event = "sms_simulated_failure",
                "Mock channel simulating delivery failure"
            );
            return Err(OtpError::Delivery {
                message: "simulated delivery failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            provider = "mock",
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            message_number = count,
            event = "sms_sent",
            "Mock channel delivered verification code"
        );
        // Development convenience: the one place the plaintext code is
        // visible is the mock channel's console output.
        println!(
            "[mock-sms] to={} code={} id={}",
            mask_phone_number(phone),
            code,
            message_id
        );

        self.sent
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SentMessage {
                phone: phone.to_string(),
                code: code.to_string(),
                message_id: message_id.clone(),
            });

        Ok(message_id)
    }
}
