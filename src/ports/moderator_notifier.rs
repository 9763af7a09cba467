//! ModeratorNotifier port - alerts toward the moderation team.
//!
//! Urgent alerts (mandatory interventions) and routine ones (supportive
//! banners, behavioral escalations) travel the same port; the adapter
//! decides paging vs. dashboard queueing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::escalation::NotifyUrgency;
use crate::domain::foundation::{DomainError, SessionId, Timestamp, UserId};

/// One alert for the moderation team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeratorAlert {
    pub user_id: UserId,
    pub session_id: SessionId,
    pub urgency: NotifyUrgency,
    /// One-line summary suitable for a pager or list view.
    pub summary: String,
    /// Structured detail (signal breakdown, matched phrases) as JSON.
    pub detail: serde_json::Value,
    pub occurred_at: Timestamp,
}

impl ModeratorAlert {
    pub fn new(
        user_id: UserId,
        session_id: SessionId,
        urgency: NotifyUrgency,
        summary: impl Into<String>,
        detail: serde_json::Value,
        occurred_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            session_id,
            urgency,
            summary: summary.into(),
            detail,
            occurred_at,
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.urgency == NotifyUrgency::Urgent
    }
}

/// Port for notifying moderators.
///
/// Like event publishing, notification is fire-and-forget relative to the
/// message-send path; delivery failures are the adapter's to retry.
#[async_trait]
pub trait ModeratorNotifier: Send + Sync {
    async fn notify(&self, alert: ModeratorAlert) -> Result<(), DomainError>;
}
