use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format, e.g. "+15551234567"
    #[validate(length(min = 1, max = 20))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Phone number in E.164 format
    #[validate(length(min = 1, max = 20))]
    pub phone: String,

    /// Numeric verification code (6 digits by default, 4-9 depending
    /// on deployment configuration)
    #[validate(length(min = 4, max = 9))]
    pub otp: String,
}

/// Response for a successful send-otp call
///
/// The passcode itself is delivered out of band and is never part of
/// this body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
    /// Seconds until the issued code expires
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
}
