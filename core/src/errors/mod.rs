//! Domain error types for the OTP lifecycle
//!
//! Every lifecycle outcome short of success is a typed, recoverable
//! error surfaced to the caller. Nothing here is process-fatal; the
//! only abort-worthy failure in the system is random-source
//! unavailability, and that is reported once at startup through
//! [`OtpError::RandomSource`].

use thiserror::Error;

/// Errors produced by the OTP store and its collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// A required input was missing or empty
    #[error("Required field missing or empty: {field}")]
    InvalidInput { field: String },

    /// No outstanding passcode for this phone number
    #[error("No verification code found for this phone number")]
    NotFound,

    /// The passcode's TTL has passed
    #[error("Verification code has expired")]
    Expired,

    /// All verification attempts have been used up
    #[error("Maximum verification attempts exceeded")]
    Exhausted,

    /// The submitted passcode did not match
    #[error("Invalid verification code, {attempts_remaining} attempt(s) remaining")]
    InvalidCode { attempts_remaining: u32 },

    /// The passcode was already used successfully (replay)
    #[error("Verification code has already been used")]
    Consumed,

    /// The delivery channel failed to transmit a passcode
    #[error("Delivery failure: {message}")]
    Delivery { message: String },

    /// The OS random source is unavailable; aborts initialization
    #[error("Secure random source unavailable: {message}")]
    RandomSource { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl OtpError {
    /// Machine-readable kind, used as the `error` field in API responses
    pub fn kind(&self) -> &'static str {
        match self {
            OtpError::InvalidInput { .. } => "invalid_input",
            OtpError::NotFound => "not_found",
            OtpError::Expired => "expired",
            OtpError::Exhausted => "exhausted",
            OtpError::InvalidCode { .. } => "invalid_code",
            OtpError::Consumed => "consumed",
            OtpError::Delivery { .. } => "delivery_failure",
            OtpError::RandomSource { .. } => "internal",
            OtpError::Internal { .. } => "internal",
        }
    }

    /// Whether this error is an expected verification outcome rather
    /// than a system fault
    pub fn is_verification_outcome(&self) -> bool {
        matches!(
            self,
            OtpError::NotFound
                | OtpError::Expired
                | OtpError::Exhausted
                | OtpError::InvalidCode { .. }
                | OtpError::Consumed
        )
    }
}

pub type OtpResult<T> = Result<T, OtpError>;
