//! EvaluateMessage - the per-message evaluation pipeline.
//!
//! classify -> update tracker -> decide policy -> emit side effects.
//!
//! The pipeline is synchronous and CPU-only up to the decision; event and
//! moderator delivery is spawned fire-and-forget so a slow or failing
//! collaborator can never block or fail the verdict returned to the chat
//! layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::behavior::BehavioralAssessment;
use crate::domain::escalation::{
    EscalationPolicy, InterventionDirective, InterventionReason, PolicyAction, PolicyDecision,
};
use crate::domain::events::{
    BehavioralEscalation, CrisisIntervention, HighRiskMessage, MediumRiskMessage,
};
use crate::domain::foundation::{EventEnvelope, EventId, SessionId, Timestamp, UserId};
use crate::domain::risk::{RiskAssessment, TextRiskClassifier};
use crate::ports::{EventPublisher, ModeratorAlert, ModeratorNotifier, TrackerRegistry};

/// Command to evaluate one incoming chat message.
///
/// Carries the raw user id as received from the chat layer; the handler
/// validates it. Risky-looking text is never an error, only a verdict.
#[derive(Debug, Clone)]
pub struct EvaluateMessageCommand {
    /// The user who sent the message, as received from the chat layer.
    pub user_id: String,
    /// The session the message belongs to.
    pub session_id: SessionId,
    /// Raw message text.
    pub text: String,
    /// When the message arrived, from the deployment's clock source.
    pub timestamp: Timestamp,
}

impl EvaluateMessageCommand {
    pub fn new(
        user_id: impl Into<String>,
        session_id: SessionId,
        text: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            session_id,
            text: text.into(),
            timestamp,
        }
    }
}

/// Errors from the evaluation use case.
///
/// Deliberately small: detection never fails on message content, and
/// collaborator failures are isolated from the decision path.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateMessageError {
    /// The user id was empty or whitespace.
    #[error("user id must not be blank")]
    EmptyUserId,
}

/// Result of evaluating one message.
///
/// `behavioral` is None only in degraded mode (tracker unavailable), in
/// which case the decision was made from the message tier alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub assessment: RiskAssessment,
    pub behavioral: Option<BehavioralAssessment>,
    pub decision: PolicyDecision,
}

impl EvaluationOutcome {
    /// The authoritative verdict for the UI collaborator.
    pub fn directive(&self) -> &InterventionDirective {
        &self.decision.directive
    }

    /// True if the session must be paused pending the intervention.
    pub fn session_paused(&self) -> bool {
        self.decision.pauses_session()
    }
}

/// Handler wiring classifier, tracker registry, policy, and collaborators.
pub struct EvaluateMessageHandler<P, N, R>
where
    P: EventPublisher,
    N: ModeratorNotifier,
    R: TrackerRegistry,
{
    classifier: TextRiskClassifier,
    policy: EscalationPolicy,
    registry: Arc<R>,
    publisher: Arc<P>,
    notifier: Arc<N>,
}

impl<P, N, R> EvaluateMessageHandler<P, N, R>
where
    P: EventPublisher + 'static,
    N: ModeratorNotifier + 'static,
    R: TrackerRegistry + 'static,
{
    /// Creates a handler with the given collaborators.
    pub fn new(registry: Arc<R>, publisher: Arc<P>, notifier: Arc<N>) -> Self {
        Self {
            classifier: TextRiskClassifier::new(),
            policy: EscalationPolicy::new(),
            registry,
            publisher,
            notifier,
        }
    }

    /// Evaluates one message and returns the verdict.
    ///
    /// A blank user id is the only rejectable input; everything else
    /// produces a decision. If the session's tracker is unusable the
    /// policy falls back to the message tier alone rather than returning
    /// silence.
    pub async fn handle(
        &self,
        cmd: EvaluateMessageCommand,
    ) -> Result<EvaluationOutcome, EvaluateMessageError> {
        let user_id =
            UserId::new(cmd.user_id.clone()).map_err(|_| EvaluateMessageError::EmptyUserId)?;

        let assessment = self.classifier.classify(&cmd.text, cmd.timestamp);

        // Tracker update and behavioral read happen under the session's
        // lock in one hold, so messages of a session are applied strictly
        // in arrival order. No await points while the lock is held.
        let tracker = self.registry.tracker_for(&cmd.session_id);
        let behavioral = match tracker.lock() {
            Ok(mut guard) => {
                guard.add_message(cmd.text.clone(), assessment.level, cmd.timestamp);
                Some(guard.assess(cmd.timestamp))
            }
            Err(_) => {
                warn!(
                    session_id = %cmd.session_id,
                    "tracker lock poisoned; deciding from message tier only"
                );
                None
            }
        };

        let decision = match &behavioral {
            Some(b) => self.policy.decide(&assessment, b),
            None => self.policy.decide_message_only(&assessment),
        };

        info!(
            user_id = %user_id,
            session_id = %cmd.session_id,
            risk_level = %assessment.level,
            tier = ?decision.directive.tier(),
            mandatory = decision.directive.is_mandatory(),
            "message evaluated"
        );

        self.dispatch(&user_id, &cmd, &assessment, behavioral.as_ref(), &decision);

        Ok(EvaluationOutcome {
            assessment,
            behavioral,
            decision,
        })
    }

    /// Ends a monitored session, dropping its tracker and history.
    pub fn end_session(&self, session_id: &SessionId) -> bool {
        self.registry.remove(session_id)
    }

    /// Builds the envelopes/alerts for a decision and spawns delivery.
    ///
    /// Delivery failures are logged and swallowed; they are the sink's to
    /// retry and must not surface into the message-send path.
    fn dispatch(
        &self,
        user_id: &UserId,
        cmd: &EvaluateMessageCommand,
        assessment: &RiskAssessment,
        behavioral: Option<&BehavioralAssessment>,
        decision: &PolicyDecision,
    ) {
        let correlation_id = Uuid::new_v4().to_string();
        let mut envelopes: Vec<EventEnvelope> = Vec::new();
        let mut alerts: Vec<ModeratorAlert> = Vec::new();

        for action in &decision.actions {
            match action {
                PolicyAction::EmitHighRiskEvent => {
                    envelopes.push(EventEnvelope::from_event(&HighRiskMessage {
                        event_id: EventId::new(),
                        user_id: user_id.clone(),
                        session_id: cmd.session_id,
                        message: cmd.text.clone(),
                        risk_level: assessment.level,
                        matches: assessment.matched_phrases.clone(),
                        confidence: assessment.confidence,
                        occurred_at: cmd.timestamp,
                    }));
                }
                PolicyAction::EmitCrisisIntervention => {
                    envelopes.push(EventEnvelope::from_event(&CrisisIntervention {
                        event_id: EventId::new(),
                        user_id: user_id.clone(),
                        session_id: cmd.session_id,
                        tier: decision.directive.tier(),
                        reason: decision.directive.reason(),
                        occurred_at: cmd.timestamp,
                    }));
                }
                PolicyAction::EmitMediumRiskEvent => {
                    envelopes.push(EventEnvelope::from_event(&MediumRiskMessage {
                        event_id: EventId::new(),
                        user_id: user_id.clone(),
                        session_id: cmd.session_id,
                        message: cmd.text.clone(),
                        risk_level: assessment.level,
                        matches: assessment.matched_phrases.clone(),
                        confidence: assessment.confidence,
                        occurred_at: cmd.timestamp,
                    }));
                }
                PolicyAction::EmitBehavioralEscalation => {
                    if let Some(b) = behavioral {
                        envelopes.push(EventEnvelope::from_event(&BehavioralEscalation {
                            event_id: EventId::new(),
                            user_id: user_id.clone(),
                            session_id: cmd.session_id,
                            signals: b.signals,
                            signal_count: b.signal_count,
                            recommendation: b.recommendation,
                            occurred_at: cmd.timestamp,
                        }));
                    }
                }
                PolicyAction::NotifyModerators { urgency } => {
                    // A purely behavioral escalation carries message level
                    // None; name the trigger instead of the level.
                    let summary = match decision.directive.reason() {
                        InterventionReason::Behavioral => {
                            format!("behavioral escalation in session {}", cmd.session_id)
                        }
                        _ => format!(
                            "{} risk activity in session {}",
                            assessment.level, cmd.session_id
                        ),
                    };
                    alerts.push(ModeratorAlert::new(
                        user_id.clone(),
                        cmd.session_id,
                        *urgency,
                        summary,
                        serde_json::json!({
                            "risk_level": assessment.level,
                            "matched_phrases": assessment.matched_phrases,
                            "behavioral": behavioral,
                            "tier": decision.directive.tier(),
                        }),
                        cmd.timestamp,
                    ));
                }
                PolicyAction::PauseSession => {
                    // Carried in the directive/outcome; the session layer
                    // enforces the pause.
                }
            }
        }

        if envelopes.is_empty() && alerts.is_empty() {
            return;
        }

        let envelopes: Vec<EventEnvelope> = envelopes
            .into_iter()
            .map(|e| {
                e.with_correlation_id(correlation_id.clone())
                    .with_user_id(user_id.to_string())
            })
            .collect();

        let publisher = Arc::clone(&self.publisher);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            for envelope in envelopes {
                let event_type = envelope.event_type.clone();
                if let Err(e) = publisher.publish(envelope).await {
                    warn!(error = %e, event_type, "crisis event delivery failed");
                }
            }
            for alert in alerts {
                if let Err(e) = notifier.notify(alert).await {
                    warn!(error = %e, "moderator notification failed");
                }
            }
        });
    }
}
