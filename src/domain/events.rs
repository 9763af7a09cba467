//! Crisis events emitted toward the moderation/audit collaborator.
//!
//! Append-only stream: the engine emits, dashboards and audit consume.
//! Delivery is fire-and-forget relative to the message-send path; the
//! event sink owns retries.

use serde::{Deserialize, Serialize};

use crate::crisis_event;
use crate::domain::behavior::{BehavioralSignals, RiskRecommendation};
use crate::domain::escalation::{InterventionReason, InterventionTier};
use crate::domain::foundation::{EventId, SessionId, Timestamp, UserId};
use crate::domain::risk::RiskLevel;

/// A message classified High: full text and matches included so moderators
/// can act without a round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighRiskMessage {
    pub event_id: EventId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub message: String,
    pub risk_level: RiskLevel,
    pub matches: Vec<String>,
    pub confidence: f32,
    pub occurred_at: Timestamp,
}

crisis_event!(
    HighRiskMessage,
    event_type = "risk.message.high.v1",
    session_id = session_id,
    occurred_at = occurred_at,
    event_id = event_id
);

/// A message classified Medium.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediumRiskMessage {
    pub event_id: EventId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub message: String,
    pub risk_level: RiskLevel,
    pub matches: Vec<String>,
    pub confidence: f32,
    pub occurred_at: Timestamp,
}

crisis_event!(
    MediumRiskMessage,
    event_type = "risk.message.medium.v1",
    session_id = session_id,
    occurred_at = occurred_at,
    event_id = event_id
);

/// Behavioral escalation: two or more signals active, with the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralEscalation {
    pub event_id: EventId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub signals: BehavioralSignals,
    pub signal_count: u8,
    pub recommendation: RiskRecommendation,
    pub occurred_at: Timestamp,
}

crisis_event!(
    BehavioralEscalation,
    event_type = "behavior.escalation.v1",
    session_id = session_id,
    occurred_at = occurred_at,
    event_id = event_id
);

/// A mandatory intervention was issued and the session paused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisIntervention {
    pub event_id: EventId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub tier: InterventionTier,
    pub reason: InterventionReason,
    pub occurred_at: Timestamp,
}

crisis_event!(
    CrisisIntervention,
    event_type = "crisis.intervention.v1",
    session_id = session_id,
    occurred_at = occurred_at,
    event_id = event_id
);
