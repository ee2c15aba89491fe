use std::sync::Arc;

use bz_shared::config::otp::OtpConfig;

use crate::errors::{DomainError, OtpError};
use crate::services::otp::traits::OtpStoreTrait;
use crate::services::otp::types::{DeliveryContext, MailTemplate};
use crate::services::otp::OtpService;

use crate::services::otp::mock::{FailingOtpStore, MockNotifier, MockOtpStore};

const EMAIL: &str = "a@x.com";

fn service(
    notifier: MockNotifier,
    store: MockOtpStore,
) -> (
    OtpService<MockNotifier, MockOtpStore>,
    Arc<MockNotifier>,
    Arc<MockOtpStore>,
) {
    let notifier = Arc::new(notifier);
    let store = Arc::new(store);
    let service = OtpService::new(notifier.clone(), store.clone(), OtpConfig::default());
    (service, notifier, store)
}

fn activation_context() -> DeliveryContext {
    DeliveryContext::new("A", MailTemplate::UserActivation)
}

#[tokio::test]
async fn send_code_writes_otp_and_cooldown_markers() {
    let (service, notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.send_code(EMAIL, &activation_context()).await.unwrap();

    let stored = store.value_of("otp:a@x.com").expect("otp record written");
    assert_eq!(Some(stored), notifier.last_code());
    assert_eq!(store.ttl_of("otp:a@x.com"), Some(300));
    assert_eq!(store.value_of("otp_cooldown:a@x.com").as_deref(), Some("true"));
    assert_eq!(store.ttl_of("otp_cooldown:a@x.com"), Some(60));
}

#[tokio::test]
async fn second_request_during_cooldown_is_rejected() {
    let (service, _notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.send_code(EMAIL, &activation_context()).await.unwrap();
    let original_code = store.value_of("otp:a@x.com").unwrap();

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Cooldown)));

    // The live OTP record is untouched by the rejected request
    assert_eq!(store.value_of("otp:a@x.com"), Some(original_code));
    assert_eq!(store.ttl_of("otp:a@x.com"), Some(300));
}

#[tokio::test]
async fn restriction_priority_is_cooldown_then_lock_then_spam() {
    let (service, _notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    store
        .set_with_ttl("otp_cooldown:a@x.com", "true", 60)
        .await
        .unwrap();
    store
        .set_with_ttl("otp_lock:a@x.com", "locked", 1800)
        .await
        .unwrap();
    store
        .set_with_ttl("otp_spam_lock:a@x.com", "locked", 3600)
        .await
        .unwrap();

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::Cooldown)));

    store.expire("otp_cooldown:a@x.com");
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::AccountLocked)));

    store.expire("otp_lock:a@x.com");
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::SpamLocked)));

    store.expire("otp_spam_lock:a@x.com");
    assert!(service.check_restrictions(EMAIL).await.is_ok());
}

#[tokio::test]
async fn third_request_in_window_trips_spam_lock() {
    let (service, _notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.track_request(EMAIL).await.unwrap();
    service.track_request(EMAIL).await.unwrap();

    let err = service.track_request(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::SpamLocked)));
    assert_eq!(
        store.value_of("otp_spam_lock:a@x.com").as_deref(),
        Some("locked")
    );
    assert_eq!(store.ttl_of("otp_spam_lock:a@x.com"), Some(3600));

    // The lock also shows up on the read-only restriction check
    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::SpamLocked)));
}

#[tokio::test]
async fn request_counter_refreshes_window_ttl_on_each_increment() {
    let (service, _notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.track_request(EMAIL).await.unwrap();
    assert_eq!(store.value_of("otp_request_count:a@x.com").as_deref(), Some("1"));
    assert_eq!(store.ttl_of("otp_request_count:a@x.com"), Some(3600));

    service.track_request(EMAIL).await.unwrap();
    assert_eq!(store.value_of("otp_request_count:a@x.com").as_deref(), Some("2"));
}

#[tokio::test]
async fn correct_code_verifies_once_then_replay_fails() {
    let (service, notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.send_code(EMAIL, &activation_context()).await.unwrap();
    let code = notifier.last_code().unwrap();

    service.verify_code(EMAIL, &code).await.unwrap();
    assert!(!store.contains("otp:a@x.com"));
    assert!(!store.contains("otp_attempts:a@x.com"));

    // Replay of the consumed code
    let err = service.verify_code(EMAIL, &code).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Otp(OtpError::InvalidOrExpired {
            attempts_remaining: 2
        })
    ));
}

#[tokio::test]
async fn wrong_submissions_report_decreasing_attempts() {
    let (service, _notifier, _store) = service(MockNotifier::new(), MockOtpStore::new());

    let err = service.verify_code(EMAIL, "0000").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Otp(OtpError::InvalidOrExpired {
            attempts_remaining: 2
        })
    ));

    let err = service.verify_code(EMAIL, "0000").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Otp(OtpError::InvalidOrExpired {
            attempts_remaining: 1
        })
    ));
}

#[tokio::test]
async fn third_wrong_submission_locks_the_account() {
    let (service, notifier, store) = service(MockNotifier::new(), MockOtpStore::new());

    service.send_code(EMAIL, &activation_context()).await.unwrap();
    let code = notifier.last_code().unwrap();
    let wrong = if code == "0000" { "1111" } else { "0000" };

    service.verify_code(EMAIL, wrong).await.unwrap_err();
    service.verify_code(EMAIL, wrong).await.unwrap_err();

    let err = service.verify_code(EMAIL, wrong).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::AccountLocked)));
    assert_eq!(store.ttl_of("otp_lock:a@x.com"), Some(1800));
    assert!(!store.contains("otp:a@x.com"));
    assert!(!store.contains("otp_attempts:a@x.com"));

    // Even the correct code is rejected while the lock stands
    let err = service.verify_code(EMAIL, &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::AccountLocked)));
}

#[tokio::test]
async fn delivery_failure_leaves_no_markers_behind() {
    let (service, _notifier, store) = service(MockNotifier::failing(), MockOtpStore::new());

    let err = service
        .send_code(EMAIL, &activation_context())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Otp(OtpError::DeliveryFailure)));
    assert!(!store.contains("otp:a@x.com"));
    assert!(!store.contains("otp_cooldown:a@x.com"));
}

#[tokio::test]
async fn concurrent_requests_count_every_increment() {
    // A high window limit so no request trips the spam lock; the point is
    // that no increment is lost under concurrency.
    let config = OtpConfig {
        request_window_limit: 1000,
        ..OtpConfig::default()
    };
    let store = Arc::new(MockOtpStore::new());
    let service = Arc::new(OtpService::new(
        Arc::new(MockNotifier::new()),
        store.clone(),
        config,
    ));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.track_request(EMAIL).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        store.value_of("otp_request_count:a@x.com").as_deref(),
        Some("50")
    );
}

#[tokio::test]
async fn store_outage_surfaces_service_unavailable() {
    let service = OtpService::new(
        Arc::new(MockNotifier::new()),
        Arc::new(FailingOtpStore),
        OtpConfig::default(),
    );

    let err = service.check_restrictions(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::ServiceUnavailable { .. }));

    let err = service.track_request(EMAIL).await.unwrap_err();
    assert!(matches!(err, DomainError::ServiceUnavailable { .. }));
}
