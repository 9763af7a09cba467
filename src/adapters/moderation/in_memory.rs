//! In-memory moderator notifier for testing.
//!
//! Captures alerts so tests can assert on urgency and content. Production
//! deployments route through a paging/dashboard adapter.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{ModeratorAlert, ModeratorNotifier};

/// Captures moderator alerts for test assertions.
pub struct InMemoryModeratorNotifier {
    alerts: RwLock<Vec<ModeratorAlert>>,
}

impl InMemoryModeratorNotifier {
    pub fn new() -> Self {
        Self {
            alerts: RwLock::new(Vec::new()),
        }
    }

    /// Returns all captured alerts.
    pub fn alerts(&self) -> Vec<ModeratorAlert> {
        self.alerts
            .read()
            .expect("InMemoryModeratorNotifier: alerts lock poisoned")
            .clone()
    }

    /// Returns only the urgent alerts.
    pub fn urgent_alerts(&self) -> Vec<ModeratorAlert> {
        self.alerts().into_iter().filter(|a| a.is_urgent()).collect()
    }

    /// Returns count of captured alerts.
    pub fn alert_count(&self) -> usize {
        self.alerts
            .read()
            .expect("InMemoryModeratorNotifier: alerts lock poisoned")
            .len()
    }

    /// Clears captured alerts (for test isolation).
    pub fn clear(&self) {
        self.alerts
            .write()
            .expect("InMemoryModeratorNotifier: alerts write lock poisoned")
            .clear();
    }
}

impl Default for InMemoryModeratorNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModeratorNotifier for InMemoryModeratorNotifier {
    async fn notify(&self, alert: ModeratorAlert) -> Result<(), DomainError> {
        self.alerts
            .write()
            .expect("InMemoryModeratorNotifier: alerts write lock poisoned")
            .push(alert);
        Ok(())
    }
}
