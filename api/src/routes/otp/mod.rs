//! OTP issue and verify route handlers

pub mod send;
pub mod verify;

pub use send::send_otp;
pub use verify::verify_otp;

use std::sync::Arc;

use otp_core::services::otp::{OtpService, OtpStore, SmsSender};

/// Application state shared by the route handlers
pub struct AppState<S, R>
where
    S: SmsSender + 'static,
    R: OtpStore,
{
    pub otp_service: Arc<OtpService<S, R>>,
}
