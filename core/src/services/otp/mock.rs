//! Mock implementations of the notifier and the lockout state store for
//! tests across the workspace.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{NotifierTrait, OtpStoreTrait};

/// A delivery recorded by the mock notifier
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    pub to: String,
    pub subject: String,
    pub template: String,
    pub data: serde_json::Value,
}

/// Mock notifier that records deliveries and can be told to fail
#[derive(Default)]
pub struct MockNotifier {
    pub deliveries: Arc<Mutex<Vec<RecordedDelivery>>>,
    pub fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    /// The OTP code from the most recent delivery
    pub fn last_code(&self) -> Option<String> {
        let deliveries = self.deliveries.lock().unwrap();
        deliveries
            .last()
            .and_then(|d| d.data.get("otp"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

#[async_trait]
impl NotifierTrait for MockNotifier {
    async fn deliver(
        &self,
        to: &str,
        subject: &str,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<(), String> {
        if self.fail {
            return Err("smtp connection refused".to_string());
        }
        self.deliveries.lock().unwrap().push(RecordedDelivery {
            to: to.to_string(),
            subject: subject.to_string(),
            template: template.to_string(),
            data: data.clone(),
        });
        Ok(())
    }
}

/// In-memory lockout state store
///
/// Entries never expire on their own (tests don't sleep); the recorded TTL
/// is exposed for assertions and `expire` simulates the passage of time.
/// All mutations run under one mutex, mirroring the per-key atomicity the
/// Redis pipeline provides.
#[derive(Default)]
pub struct MockOtpStore {
    entries: Arc<Mutex<HashMap<String, (String, u64)>>>,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value currently stored under a key
    pub fn value_of(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|(v, _)| v.clone())
    }

    /// TTL the key was last written with
    pub fn ttl_of(&self, key: &str) -> Option<u64> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).map(|(_, ttl)| *ttl)
    }

    /// Simulate TTL expiry of a key
    pub fn expire(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl OtpStoreTrait for MockOtpStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.value_of(key))
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn incr_and_get(&self, key: &str, ttl_seconds: u64) -> Result<i64, String> {
        let mut entries = self.entries.lock().unwrap();
        let next = match entries.get(key) {
            Some((value, _)) => value.parse::<i64>().unwrap_or(0) + 1,
            None => 1,
        };
        entries.insert(key.to_string(), (next.to_string(), ttl_seconds));
        Ok(next)
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), String> {
        let mut entries = self.entries.lock().unwrap();
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}

/// Store whose operations always fail, for outage-path tests
pub struct FailingOtpStore;

#[async_trait]
impl OtpStoreTrait for FailingOtpStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, String> {
        Err("connection timed out".to_string())
    }

    async fn set_with_ttl(&self, _key: &str, _value: &str, _ttl: u64) -> Result<(), String> {
        Err("connection timed out".to_string())
    }

    async fn incr_and_get(&self, _key: &str, _ttl: u64) -> Result<i64, String> {
        Err("connection timed out".to_string())
    }

    async fn delete(&self, _keys: &[&str]) -> Result<(), String> {
        Err("connection timed out".to_string())
    }
}
