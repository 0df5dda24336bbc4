//! Traits for storage and delivery integration

use async_trait::async_trait;

use crate::domain::entities::OtpRecord;
use crate::errors::OtpResult;

/// Trait for the concurrent record store
///
/// Implementations must make every mutation of a single phone's
/// record linearizable: two concurrent verifies for one phone may
/// never both succeed on the same code, nor drive the attempt
/// counter below zero. Operations on distinct phones should not
/// contend on a single global lock.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a record, atomically replacing any prior record for the
    /// same phone number regardless of its state
    async fn put(&self, record: OtpRecord) -> OtpResult<()>;

    /// Run the verification transition for a phone's record under the
    /// store's per-key synchronization
    ///
    /// Errors carry the lifecycle outcome: `NotFound`, `Expired`,
    /// `Consumed`, `Exhausted`, or `InvalidCode`. A missing record
    /// must produce no side effects.
    async fn verify(&self, phone: &str, candidate: &str) -> OtpResult<()>;

    /// Remove consumed and expired records, returning how many were
    /// reclaimed. Idempotent and safe concurrently with put/verify.
    async fn sweep(&self) -> OtpResult<usize>;

    /// Number of records currently resident, dead or alive
    async fn record_count(&self) -> usize;
}

/// Trait for the passcode delivery channel
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Transmit a passcode to a phone number, returning the provider
    /// message id
    ///
    /// Failures are reported as [`crate::errors::OtpError::Delivery`];
    /// retries are the channel's concern, never the store's.
    async fn deliver(&self, phone: &str, code: &str) -> OtpResult<String>;
}
