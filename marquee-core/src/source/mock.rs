//! Mock existence probe for testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::{SourceError, SourceProbe};

/// Mock probe answering existence checks from a configured set of locators.
///
/// Records every probe in issue order so tests can assert the exact scan
/// sequence. Individual locators can be configured to fail with a transport
/// error, or gated so a probe stays in flight until the test releases it
/// (used to exercise stale-result suppression).
#[derive(Debug, Default)]
pub struct MockSourceProbe {
    present: HashSet<String>,
    failing: HashSet<String>,
    probed: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl MockSourceProbe {
    /// Creates a new mock probe with an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a locator as present in the namespace.
    pub fn with_present(mut self, locator: &str) -> Self {
        self.present.insert(locator.to_string());
        self
    }

    /// Makes probes of a locator fail with a transport error.
    pub fn with_failure(mut self, locator: &str) -> Self {
        self.failing.insert(locator.to_string());
        self
    }

    /// Gates a locator so its next probe blocks until the returned handle
    /// is notified. The gate applies to a single probe.
    pub fn gate(&self, locator: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates
            .lock()
            .insert(locator.to_string(), notify.clone());
        notify
    }

    /// Locators probed so far, in issue order.
    pub fn probed(&self) -> Vec<String> {
        self.probed.lock().clone()
    }
}

#[async_trait]
impl SourceProbe for MockSourceProbe {
    async fn exists(&self, locator: &str) -> Result<bool, SourceError> {
        self.probed.lock().push(locator.to_string());

        let gate = self.gates.lock().remove(locator);
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if self.failing.contains(locator) {
            return Err(SourceError::ProbeFailed {
                url: locator.to_string(),
                reason: "simulated transport failure".to_string(),
            });
        }

        Ok(self.present.contains(locator))
    }
}
