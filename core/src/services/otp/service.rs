//! Main OTP service implementation

use std::sync::Arc;

use chrono::Duration;

use otp_shared::utils::phone::mask_phone_number;

use crate::domain::entities::OtpRecord;
use crate::errors::{OtpError, OtpResult};

use super::config::OtpServiceConfig;
use super::generator::CodeGenerator;
use super::traits::{OtpStore, SmsSender};
use super::types::IssueReceipt;

/// Service orchestrating the passcode lifecycle
///
/// `issue` generates and stores a hashed challenge and hands the
/// plaintext code to the delivery channel exactly once; `verify`
/// runs the state-machine transition in the store. Neither operation
/// ever blocks on the delivery channel.
pub struct OtpService<S: SmsSender + 'static, R: OtpStore> {
    /// Delivery channel for issued passcodes
    sms_sender: Arc<S>,
    /// Concurrent record store
    store: Arc<R>,
    /// Passcode generator (CSPRNG-backed)
    generator: CodeGenerator,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S: SmsSender + 'static, R: OtpStore> OtpService<S, R> {
    /// Create a new OTP service
    ///
    /// Fails with [`OtpError::RandomSource`] if the OS random source
    /// is unavailable; callers should treat that as fatal and abort
    /// startup.
    pub fn new(sms_sender: Arc<S>, store: Arc<R>, config: OtpServiceConfig) -> OtpResult<Self> {
        let generator = CodeGenerator::new(config.code_length)?;

        Ok(Self {
            sms_sender,
            store,
            generator,
            config,
        })
    }

    /// Issue a passcode for a phone number
    ///
    /// Any prior challenge for the phone is discarded, whatever its
    /// state. The plaintext code is dispatched to the delivery
    /// channel on a spawned task; delivery failures are logged by the
    /// channel path and never fail the issue call.
    pub async fn issue(&self, phone: &str) -> OtpResult<IssueReceipt> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(OtpError::InvalidInput {
                field: "phone".to_string(),
            });
        }

        let code = self.generator.generate();
        let record = OtpRecord::issue(
            phone.to_string(),
            &code,
            Duration::minutes(self.config.ttl_minutes),
            self.config.max_attempts,
        )?;

        let receipt = IssueReceipt {
            challenge_id: record.id,
            expires_at: record.expires_at,
        };

        self.store.put(record).await?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            challenge_id = %receipt.challenge_id,
            expires_at = %receipt.expires_at,
            event = "otp_issued",
            "Issued verification code"
        );

        // Fire-and-forget dispatch: the verify path's latency must
        // never include the delivery channel.
        let sender = Arc::clone(&self.sms_sender);
        let phone_owned = phone.to_string();
        tokio::spawn(async move {
            match sender.deliver(&phone_owned, &code).await {
                Ok(message_id) => {
                    tracing::debug!(
                        phone = %mask_phone_number(&phone_owned),
                        message_id = %message_id,
                        event = "otp_delivered",
                        "Delivery channel accepted verification code"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        phone = %mask_phone_number(&phone_owned),
                        error = %e,
                        event = "otp_delivery_failed",
                        "Delivery channel failed to transmit verification code"
                    );
                }
            }
        });

        Ok(receipt)
    }

    /// Verify a submitted passcode for a phone number
    ///
    /// Exactly one call can ever succeed per issued code; the record
    /// is consumed on success and a replay observes `Consumed`.
    pub async fn verify(&self, phone: &str, code: &str) -> OtpResult<()> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(OtpError::InvalidInput {
                field: "phone".to_string(),
            });
        }
        if code.is_empty() {
            return Err(OtpError::InvalidInput {
                field: "otp".to_string(),
            });
        }

        match self.store.verify(phone, code).await {
            Ok(()) => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    event = "otp_verified",
                    "Verification code accepted"
                );
                Ok(())
            }
            Err(e) if e.is_verification_outcome() => {
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    outcome = e.kind(),
                    event = "otp_rejected",
                    "Verification code rejected"
                );
                Err(e)
            }
            Err(e) => {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "otp_verify_error",
                    "Verification failed with a system error"
                );
                Err(e)
            }
        }
    }

    /// Configured passcode TTL in minutes
    pub fn ttl_minutes(&self) -> i64 {
        self.config.ttl_minutes
    }
}
