//! OTP record entity: one outstanding passcode challenge per phone number.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_objects::CodeHash;
use crate::errors::{OtpError, OtpResult};

/// Maximum number of failed verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 5;

/// Length of the verification code in digits
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_TTL_MINUTES: i64 = 5;

/// Lifecycle state of a record, derived lazily from its fields
///
/// `Consumed`, `Exhausted`, and `Expired` are all terminal: the only
/// way back to `Active` for a phone number is issuing a fresh record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStatus {
    /// Unconsumed, unexpired, attempts remaining
    Active,
    /// Successfully verified once; any further use is a replay
    Consumed,
    /// All attempts used up before a successful verify
    Exhausted,
    /// TTL passed without a successful verify
    Expired,
}

/// One outstanding passcode challenge bound to a phone number
///
/// The passcode itself exists only as a salted hash; the plaintext
/// leaves the core exactly once, at issuance, on its way to the
/// delivery channel.
#[derive(Debug, Clone)]
pub struct OtpRecord {
    /// Unique identifier for this challenge
    pub id: Uuid,

    /// Phone number this challenge is bound to (opaque key)
    pub phone: String,

    /// Salted one-way hash of the passcode
    code_hash: CodeHash,

    /// Timestamp of issuance
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the record is dead
    pub expires_at: DateTime<Utc>,

    /// Failed attempts left before the record becomes unusable
    pub attempts_remaining: u32,

    /// Set once on successful verification
    pub consumed: bool,
}

impl OtpRecord {
    /// Create a record for a freshly generated passcode
    ///
    /// # Arguments
    ///
    /// * `phone` - The phone number the challenge is bound to
    /// * `code` - The plaintext passcode; only its hash is retained
    /// * `ttl` - How long the record stays verifiable
    /// * `max_attempts` - Failed attempts allowed before exhaustion
    pub fn issue(
        phone: String,
        code: &str,
        ttl: Duration,
        max_attempts: u32,
    ) -> OtpResult<Self> {
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            phone,
            code_hash: CodeHash::new(code)?,
            created_at: now,
            expires_at: now + ttl,
            attempts_remaining: max_attempts,
            consumed: false,
        })
    }

    /// Whether the record's TTL has passed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the record can still be verified at `now`
    pub fn is_usable(&self, now: DateTime<Utc>) -> bool {
        !self.consumed && self.attempts_remaining > 0 && !self.is_expired(now)
    }

    /// Derive the lifecycle state at `now`
    ///
    /// Consumption wins over expiry so a replayed correct code is
    /// reported as a replay even after the TTL has also passed.
    pub fn status(&self, now: DateTime<Utc>) -> OtpStatus {
        if self.consumed {
            OtpStatus::Consumed
        } else if self.is_expired(now) {
            OtpStatus::Expired
        } else if self.attempts_remaining == 0 {
            OtpStatus::Exhausted
        } else {
            OtpStatus::Active
        }
    }

    /// Whether the record only occupies memory and can be swept
    ///
    /// Exhausted records are deliberately not dead: they are kept
    /// until expiry so verification answers `Exhausted` rather than
    /// `NotFound` for the remainder of the TTL.
    pub fn is_dead(&self, now: DateTime<Utc>) -> bool {
        self.consumed || self.is_expired(now)
    }

    /// Run the verification transition for a submitted passcode
    ///
    /// On a match the record is marked consumed (terminal). On a
    /// mismatch one attempt is deducted; the call that deducts the
    /// last attempt still reports `InvalidCode` (with zero remaining),
    /// and every call after that reports `Exhausted`.
    ///
    /// The caller must hold whatever lock makes this record's
    /// mutations linearizable; the entity itself is not synchronized.
    pub fn submit(&mut self, candidate: &str, now: DateTime<Utc>) -> OtpResult<()> {
        match self.status(now) {
            OtpStatus::Consumed => return Err(OtpError::Consumed),
            OtpStatus::Expired => return Err(OtpError::Expired),
            OtpStatus::Exhausted => return Err(OtpError::Exhausted),
            OtpStatus::Active => {}
        }

        if self.code_hash.matches(candidate) {
            self.consumed = true;
            Ok(())
        } else {
            self.attempts_remaining -= 1;
            Err(OtpError::InvalidCode {
                attempts_remaining: self.attempts_remaining,
            })
        }
    }
}
