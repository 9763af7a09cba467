//! In-memory tracker registry.
//!
//! Explicit `SessionId -> BehavioralSignalTracker` map. The outer RwLock
//! guards only the map; each tracker sits behind its own mutex so distinct
//! sessions evaluate in parallel while one session's stream is serialized.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::DetectionConfig;
use crate::domain::behavior::BehavioralSignalTracker;
use crate::domain::foundation::SessionId;
use crate::ports::TrackerRegistry;

/// Map-backed tracker registry, one tracker per monitored session.
pub struct InMemoryTrackerRegistry {
    config: DetectionConfig,
    trackers: RwLock<HashMap<SessionId, Arc<Mutex<BehavioralSignalTracker>>>>,
}

impl InMemoryTrackerRegistry {
    /// Creates a registry whose trackers use the given thresholds.
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            trackers: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTrackerRegistry {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

impl TrackerRegistry for InMemoryTrackerRegistry {
    fn tracker_for(&self, session_id: &SessionId) -> Arc<Mutex<BehavioralSignalTracker>> {
        // A poisoned map lock only means a panic elsewhere mid-insert;
        // the map itself is still usable, so recover the guard.
        {
            let map = self
                .trackers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(tracker) = map.get(session_id) {
                return Arc::clone(tracker);
            }
        }

        let mut map = self
            .trackers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            map.entry(*session_id)
                .or_insert_with(|| Arc::new(Mutex::new(BehavioralSignalTracker::new(self.config)))),
        )
    }

    fn remove(&self, session_id: &SessionId) -> bool {
        self.trackers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    fn active_sessions(&self) -> usize {
        self.trackers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
