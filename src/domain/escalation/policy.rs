//! Escalation policy - maps assessments to an intervention directive.
//!
//! Stateless and pure: every message evaluation starts from scratch, takes
//! the message-level assessment plus the behavioral assessment, and
//! produces the directive together with the side effects the collaborators
//! must perform. Any "current modal" visibility state belongs to the UI
//! collaborator, which must obey the directive's mandatory flag.

use serde::{Deserialize, Serialize};

use crate::domain::behavior::BehavioralAssessment;
use crate::domain::risk::{RiskAssessment, RiskLevel};

use super::{InterventionDirective, InterventionReason, InterventionTier};

/// Urgency of a moderator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyUrgency {
    Urgent,
    Routine,
}

/// Side effects the collaborators must perform for a decision.
///
/// The policy names them; the application layer executes them. Emission is
/// fire-and-forget relative to the message-send path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PolicyAction {
    /// Emit a HighRiskMessage event with full text and matches.
    EmitHighRiskEvent,
    /// Emit a CrisisIntervention event recording the mandatory block.
    EmitCrisisIntervention,
    /// Emit a MediumRiskMessage event.
    EmitMediumRiskEvent,
    /// Emit a BehavioralEscalation event with the signal breakdown.
    EmitBehavioralEscalation,
    /// Notify moderators at the given urgency.
    NotifyModerators { urgency: NotifyUrgency },
    /// Pause the user's session pending the mandatory intervention.
    PauseSession,
}

/// A directive plus the side effects it entails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub directive: InterventionDirective,
    pub actions: Vec<PolicyAction>,
}

impl PolicyDecision {
    /// True if the decision pauses the session.
    pub fn pauses_session(&self) -> bool {
        self.actions.contains(&PolicyAction::PauseSession)
    }
}

/// Pure decision function from assessments to directive + actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscalationPolicy;

impl EscalationPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Decides the intervention for one message evaluation.
    ///
    /// Message tier first (High mandatory > Medium > Low > none), then the
    /// behavioral overlay: an Escalate recommendation always emits a
    /// BehavioralEscalation event and forces a None/Low directive up to at
    /// least Medium. A High directive is never downgraded.
    pub fn decide(
        &self,
        assessment: &RiskAssessment,
        behavioral: &BehavioralAssessment,
    ) -> PolicyDecision {
        let mut decision = self.decide_message_only(assessment);

        if behavioral.should_escalate() {
            decision.actions.push(PolicyAction::EmitBehavioralEscalation);
            decision.actions.push(PolicyAction::NotifyModerators {
                urgency: NotifyUrgency::Routine,
            });

            if decision.directive.tier() < InterventionTier::Medium {
                decision.directive = InterventionDirective::dismissible(
                    InterventionTier::Medium,
                    InterventionReason::Behavioral,
                );
            } else if !decision.directive.is_mandatory() {
                // Medium from the message plus behavioral escalation: same
                // tier, both contributed.
                decision.directive = InterventionDirective::dismissible(
                    decision.directive.tier(),
                    InterventionReason::Both,
                );
            }
            // A mandatory High directive stays exactly as it is.
        }

        decision
    }

    /// Degraded-mode decision from the message tier alone.
    ///
    /// Used when behavioral data is unavailable; the policy still returns
    /// the most conservative directive the available information supports
    /// rather than silently deciding None.
    pub fn decide_message_only(&self, assessment: &RiskAssessment) -> PolicyDecision {
        match assessment.level {
            RiskLevel::High => PolicyDecision {
                directive: InterventionDirective::mandatory(
                    InterventionTier::High,
                    InterventionReason::Message,
                ),
                actions: vec![
                    PolicyAction::EmitHighRiskEvent,
                    PolicyAction::EmitCrisisIntervention,
                    PolicyAction::NotifyModerators {
                        urgency: NotifyUrgency::Urgent,
                    },
                    PolicyAction::PauseSession,
                ],
            },
            RiskLevel::Medium => PolicyDecision {
                directive: InterventionDirective::dismissible(
                    InterventionTier::Medium,
                    InterventionReason::Message,
                ),
                actions: vec![
                    PolicyAction::EmitMediumRiskEvent,
                    PolicyAction::NotifyModerators {
                        urgency: NotifyUrgency::Routine,
                    },
                ],
            },
            RiskLevel::Low => PolicyDecision {
                directive: InterventionDirective::dismissible(
                    InterventionTier::Low,
                    InterventionReason::Message,
                ),
                actions: Vec::new(),
            },
            RiskLevel::None => PolicyDecision {
                directive: InterventionDirective::none(),
                actions: Vec::new(),
            },
        }
    }
}
