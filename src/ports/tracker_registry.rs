//! TrackerRegistry port - per-session tracker ownership.
//!
//! The registry is an explicit map owned by the session-management layer.
//! Each session's tracker sits behind its own lock so distinct sessions
//! evaluate in parallel while one session's message stream stays strictly
//! ordered.

use std::sync::{Arc, Mutex};

use crate::domain::behavior::BehavioralSignalTracker;
use crate::domain::foundation::SessionId;

/// Port for looking up (or lazily creating) the tracker of a session.
pub trait TrackerRegistry: Send + Sync {
    /// Returns the session's tracker, creating one if the session is new.
    ///
    /// The per-entry mutex is the serialization point for that session's
    /// message stream; callers must not hold it across await points.
    fn tracker_for(&self, session_id: &SessionId) -> Arc<Mutex<BehavioralSignalTracker>>;

    /// Drops the session's tracker on logout/session end.
    ///
    /// Returns true if a tracker existed.
    fn remove(&self, session_id: &SessionId) -> bool;

    /// Number of sessions currently monitored.
    fn active_sessions(&self) -> usize;
}
