//! Behavioral risk assessment types.
//!
//! A behavioral signal is a pattern across multiple messages over time,
//! distinct from any single message's risk level.

use serde::{Deserialize, Serialize};

/// The three behavioral detectors' verdicts for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BehavioralSignals {
    /// Five or more messages inside the rapid-posting window.
    pub rapid_posting: bool,
    /// Non-decreasing risk trend reaching at least Medium.
    pub emotional_escalation: bool,
    /// Repeated Medium/High messages inside the repetition window.
    pub repeated_crisis_language: bool,
}

impl BehavioralSignals {
    /// Number of active signals, 0..=3.
    pub fn count(&self) -> u8 {
        self.rapid_posting as u8
            + self.emotional_escalation as u8
            + self.repeated_crisis_language as u8
    }
}

/// Recommendation derived from the active signal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRecommendation {
    /// No signals active.
    Normal,
    /// Exactly one signal active; worth watching.
    Monitor,
    /// Two or more signals active; escalate to moderators.
    Escalate,
}

/// Combined behavioral verdict for one evaluation.
///
/// Value object, recomputed per message from the tracker's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralAssessment {
    pub signals: BehavioralSignals,
    pub signal_count: u8,
    pub recommendation: RiskRecommendation,
}

impl BehavioralAssessment {
    /// Derives the assessment from the detector verdicts.
    pub fn from_signals(signals: BehavioralSignals) -> Self {
        let signal_count = signals.count();
        let recommendation = match signal_count {
            0 => RiskRecommendation::Normal,
            1 => RiskRecommendation::Monitor,
            _ => RiskRecommendation::Escalate,
        };
        Self {
            signals,
            signal_count,
            recommendation,
        }
    }

    /// Assessment with no history at all (fresh or cleared tracker).
    pub fn quiet() -> Self {
        Self::from_signals(BehavioralSignals::default())
    }

    /// True if the recommendation is Escalate.
    pub fn should_escalate(&self) -> bool {
        self.recommendation == RiskRecommendation::Escalate
    }
}
