//! Service-level tests for issue and verify

use std::sync::Arc;

use crate::errors::OtpError;
use crate::services::otp::{OtpService, OtpServiceConfig};

use super::mocks::{InMemoryOtpStore, RecordingSmsSender};

const PHONE: &str = "+15551234567";

fn service_with(
    sender: Arc<RecordingSmsSender>,
) -> OtpService<RecordingSmsSender, InMemoryOtpStore> {
    OtpService::new(
        sender,
        Arc::new(InMemoryOtpStore::new()),
        OtpServiceConfig::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_issue_rejects_empty_phone() {
    let service = service_with(Arc::new(RecordingSmsSender::new()));

    let result = service.issue("").await;
    assert_eq!(
        result.unwrap_err(),
        OtpError::InvalidInput {
            field: "phone".to_string()
        }
    );

    let result = service.issue("   ").await;
    assert!(matches!(result, Err(OtpError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_verify_rejects_empty_inputs() {
    let service = service_with(Arc::new(RecordingSmsSender::new()));

    assert!(matches!(
        service.verify("", "123456").await,
        Err(OtpError::InvalidInput { .. })
    ));
    assert!(matches!(
        service.verify(PHONE, "").await,
        Err(OtpError::InvalidInput { .. })
    ));
}

#[tokio::test]
async fn test_issue_delivers_code_and_verify_succeeds_once() {
    let sender = Arc::new(RecordingSmsSender::new());
    let service = service_with(Arc::clone(&sender));

    let receipt = service.issue(PHONE).await.unwrap();
    assert!(receipt.expires_at > chrono::Utc::now());

    let sent = sender.wait_for_sends(1).await;
    assert_eq!(sent.len(), 1);
    let (delivered_phone, code) = &sent[0];
    assert_eq!(delivered_phone, PHONE);
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    // First verify with the delivered code succeeds
    assert!(service.verify(PHONE, code).await.is_ok());

    // Replaying the same correct code is rejected as a replay
    assert_eq!(service.verify(PHONE, code).await, Err(OtpError::Consumed));
}

#[tokio::test]
async fn test_verify_unknown_phone_is_not_found() {
    let service = service_with(Arc::new(RecordingSmsSender::new()));

    assert_eq!(
        service.verify("+15550000000", "123456").await,
        Err(OtpError::NotFound)
    );
}

#[tokio::test]
async fn test_wrong_code_decrements_attempts() {
    let sender = Arc::new(RecordingSmsSender::new());
    let service = service_with(Arc::clone(&sender));

    service.issue(PHONE).await.unwrap();
    let sent = sender.wait_for_sends(1).await;
    let code = &sent[0].1;

    // Submit a code guaranteed to differ from the issued one
    let wrong = if code == "000000" { "000001" } else { "000000" };
    let result = service.verify(PHONE, wrong).await;
    assert_eq!(
        result,
        Err(OtpError::InvalidCode {
            attempts_remaining: 4
        })
    );

    // The correct code still works after a failed attempt
    assert!(service.verify(PHONE, code).await.is_ok());
}

#[tokio::test]
async fn test_exhaustion_then_correct_code_fails() {
    let sender = Arc::new(RecordingSmsSender::new());
    let service = service_with(Arc::clone(&sender));

    service.issue(PHONE).await.unwrap();
    let sent = sender.wait_for_sends(1).await;
    let code = &sent[0].1;
    let wrong = if code == "000000" { "000001" } else { "000000" };

    for _ in 0..5 {
        let result = service.verify(PHONE, wrong).await;
        assert!(matches!(result, Err(OtpError::InvalidCode { .. })));
    }

    assert_eq!(service.verify(PHONE, code).await, Err(OtpError::Exhausted));
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let sender = Arc::new(RecordingSmsSender::new());
    let service = service_with(Arc::clone(&sender));

    service.issue(PHONE).await.unwrap();
    service.issue(PHONE).await.unwrap();

    let sent = sender.wait_for_sends(2).await;
    let first_code = &sent[0].1;
    let second_code = &sent[1].1;

    if first_code != second_code {
        // The stale code must not verify against the fresh record
        assert!(matches!(
            service.verify(PHONE, first_code).await,
            Err(OtpError::InvalidCode { .. })
        ));
    }
    assert!(service.verify(PHONE, second_code).await.is_ok());
}

#[tokio::test]
async fn test_delivery_failure_does_not_fail_issue() {
    let sender = Arc::new(RecordingSmsSender::failing());
    let service = service_with(Arc::clone(&sender));

    // Issue succeeds even though the channel will reject the send
    let receipt = service.issue(PHONE).await;
    assert!(receipt.is_ok());

    // Give the spawned delivery task a chance to run and fail
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(sender.sent().is_empty());
}
