//! Sharded in-memory OTP record store
//!
//! The map is split across a fixed number of shards, each guarded by
//! its own mutex; a phone number always hashes to the same shard, so
//! every mutation of one record happens under that shard's lock and
//! is linearizable, while unrelated phone numbers rarely contend.
//! No lock is ever held across an await point.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use otp_core::domain::entities::OtpRecord;
use otp_core::errors::{OtpError, OtpResult};
use otp_core::services::otp::OtpStore;
use otp_shared::utils::phone::mask_phone_number;

/// Default number of shards
const DEFAULT_SHARD_COUNT: usize = 16;

type Shard = Mutex<HashMap<String, OtpRecord>>;

/// In-memory, internally synchronized record store
pub struct MemoryOtpStore {
    shards: Vec<Shard>,
}

impl MemoryOtpStore {
    /// Create a store with the default shard count
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Create a store with an explicit shard count (minimum 1)
    pub fn with_shards(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let shards = (0..shard_count)
            .map(|_| Mutex::new(HashMap::new()))
            .collect();
        Self { shards }
    }

    fn shard_for(&self, phone: &str) -> &Shard {
        let mut hasher = DefaultHasher::new();
        phone.hash(&mut hasher);
        let index = (hasher.finish() as usize) % self.shards.len();
        &self.shards[index]
    }

    fn lock(shard: &Shard) -> std::sync::MutexGuard<'_, HashMap<String, OtpRecord>> {
        // A panic while holding the lock leaves only record data
        // behind, which stays internally consistent; recover the
        // guard instead of propagating the poison.
        shard.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn put(&self, record: OtpRecord) -> OtpResult<()> {
        let shard = self.shard_for(&record.phone);
        let mut records = Self::lock(shard);

        let replaced = records.insert(record.phone.clone(), record).is_some();
        if replaced {
            debug!(event = "otp_record_replaced", "Replaced outstanding record");
        }

        Ok(())
    }

    async fn verify(&self, phone: &str, candidate: &str) -> OtpResult<()> {
        let shard = self.shard_for(phone);
        let mut records = Self::lock(shard);

        let record = records.get_mut(phone).ok_or(OtpError::NotFound)?;
        let result = record.submit(candidate, Utc::now());

        // Lazy expiry: an expired record is reported once, then
        // dropped so later lookups see NotFound.
        if matches!(result, Err(OtpError::Expired)) {
            records.remove(phone);
            debug!(
                phone = %mask_phone_number(phone),
                event = "otp_record_expired",
                "Dropped expired record on access"
            );
        }

        result
    }

    async fn sweep(&self) -> OtpResult<usize> {
        let now = Utc::now();
        let mut removed = 0;

        for shard in &self.shards {
            let mut records = Self::lock(shard);
            let before = records.len();
            records.retain(|_, record| !record.is_dead(now));
            removed += before - records.len();
        }

        Ok(removed)
    }

    async fn record_count(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| Self::lock(shard).len())
            .sum()
    }
}
