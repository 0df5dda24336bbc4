//! Types for OTP service results

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result of issuing a passcode
///
/// Deliberately contains no plaintext code: the code goes to the
/// delivery channel, and this receipt goes to the transport layer.
#[derive(Debug, Clone)]
pub struct IssueReceipt {
    /// Identifier of the issued challenge
    pub challenge_id: Uuid,
    /// When the challenge stops being verifiable
    pub expires_at: DateTime<Utc>,
}
