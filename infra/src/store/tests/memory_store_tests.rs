//! Tests for the sharded in-memory store

use std::sync::Arc;

use chrono::Duration;

use otp_core::domain::entities::OtpRecord;
use otp_core::errors::OtpError;
use otp_core::services::otp::OtpStore;

use crate::store::MemoryOtpStore;

const PHONE: &str = "+15551234567";

fn record(phone: &str, code: &str, ttl_minutes: i64, max_attempts: u32) -> OtpRecord {
    OtpRecord::issue(
        phone.to_string(),
        code,
        Duration::minutes(ttl_minutes),
        max_attempts,
    )
    .unwrap()
}

#[tokio::test]
async fn test_put_then_verify_succeeds() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "004821", 5, 5)).await.unwrap();

    assert!(store.verify(PHONE, "004821").await.is_ok());
}

#[tokio::test]
async fn test_verify_missing_phone_is_not_found() {
    let store = MemoryOtpStore::new();
    assert_eq!(
        store.verify(PHONE, "004821").await,
        Err(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_replay_is_consumed_until_swept() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "004821", 5, 5)).await.unwrap();

    assert!(store.verify(PHONE, "004821").await.is_ok());
    assert_eq!(
        store.verify(PHONE, "004821").await,
        Err(OtpError::Consumed)
    );

    // The consumed record still occupies memory until a sweep
    assert_eq!(store.record_count().await, 1);
    assert_eq!(store.sweep().await.unwrap(), 1);
    assert_eq!(
        store.verify(PHONE, "004821").await,
        Err(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_wrong_code_counts_down_to_exhausted() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "004821", 5, 2)).await.unwrap();

    assert_eq!(
        store.verify(PHONE, "111111").await,
        Err(OtpError::InvalidCode {
            attempts_remaining: 1
        })
    );
    assert_eq!(
        store.verify(PHONE, "222222").await,
        Err(OtpError::InvalidCode {
            attempts_remaining: 0
        })
    );
    // Correct code after depletion is rejected and stays rejected
    assert_eq!(store.verify(PHONE, "004821").await, Err(OtpError::Exhausted));
    assert_eq!(store.verify(PHONE, "004821").await, Err(OtpError::Exhausted));
}

#[tokio::test]
async fn test_expired_record_is_dropped_on_access() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "004821", -1, 5)).await.unwrap();

    // First access reports the expiry, then the record is gone
    assert_eq!(store.verify(PHONE, "004821").await, Err(OtpError::Expired));
    assert_eq!(
        store.verify(PHONE, "004821").await,
        Err(OtpError::NotFound)
    );
    assert_eq!(store.record_count().await, 0);
}

#[tokio::test]
async fn test_put_replaces_prior_record() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "111111", 5, 5)).await.unwrap();
    store.put(record(PHONE, "222222", 5, 5)).await.unwrap();

    assert_eq!(store.record_count().await, 1);

    // The stale code no longer verifies, the fresh one does
    assert!(matches!(
        store.verify(PHONE, "111111").await,
        Err(OtpError::InvalidCode { .. })
    ));
    assert!(store.verify(PHONE, "222222").await.is_ok());
}

#[tokio::test]
async fn test_reissue_resets_an_exhausted_phone() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "111111", 5, 1)).await.unwrap();
    let _ = store.verify(PHONE, "000000").await;
    assert_eq!(store.verify(PHONE, "111111").await, Err(OtpError::Exhausted));

    // A fresh issue restarts the state machine for the phone
    store.put(record(PHONE, "222222", 5, 1)).await.unwrap();
    assert!(store.verify(PHONE, "222222").await.is_ok());
}

#[tokio::test]
async fn test_sweep_keeps_exhausted_unexpired_records() {
    let store = MemoryOtpStore::new();
    store.put(record(PHONE, "111111", 5, 1)).await.unwrap();
    let _ = store.verify(PHONE, "000000").await;

    // Exhausted but unexpired: the sweep must keep it so lookups
    // still answer Exhausted rather than NotFound
    assert_eq!(store.sweep().await.unwrap(), 0);
    assert_eq!(store.verify(PHONE, "111111").await, Err(OtpError::Exhausted));
}

#[tokio::test]
async fn test_phones_are_independent() {
    let store = MemoryOtpStore::with_shards(4);
    for i in 0..32 {
        let phone = format!("+1555000{:04}", i);
        store.put(record(&phone, "123456", 5, 5)).await.unwrap();
    }

    assert_eq!(store.record_count().await, 32);
    assert!(store.verify("+15550000007", "123456").await.is_ok());

    // Consuming one phone's code leaves every other phone untouched
    assert!(store.verify("+15550000008", "123456").await.is_ok());
    assert_eq!(
        store.verify("+15550000007", "123456").await,
        Err(OtpError::Consumed)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_correct_verifies_succeed_exactly_once() {
    let store = Arc::new(MemoryOtpStore::new());
    store.put(record(PHONE, "004821", 5, 5)).await.unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.verify(PHONE, "004821").await })
        })
        .collect();

    let mut successes = 0;
    let mut replays = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => successes += 1,
            Err(OtpError::Consumed) => replays += 1,
            Err(other) => panic!("unexpected outcome: {:?}", other),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(replays, 15);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_wrong_verifies_never_underflow_attempts() {
    let store = Arc::new(MemoryOtpStore::new());
    store.put(record(PHONE, "004821", 5, 3)).await.unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.verify(PHONE, "999999").await })
        })
        .collect();

    let mut invalid = 0;
    let mut exhausted = 0;
    for task in tasks {
        match task.await.unwrap() {
            Err(OtpError::InvalidCode { .. }) => invalid += 1,
            Err(OtpError::Exhausted) => exhausted += 1,
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    // Exactly max_attempts calls may decrement; the rest see Exhausted
    assert_eq!(invalid, 3);
    assert_eq!(exhausted, 13);
}
