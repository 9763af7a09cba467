//! Risk assessment produced for a single message.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

use super::RiskLevel;

/// Verdict of the text classifier for one message.
///
/// Value object: recomputed per message, never mutated after creation.
/// Invariant: `matched_phrases` is empty if and only if `level == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Severity of the matched tier.
    pub level: RiskLevel,
    /// Confidence in the verdict, 0.0 - 1.0.
    pub confidence: f32,
    /// Phrases that matched, in tier-list order.
    pub matched_phrases: Vec<String>,
    /// When the assessment was made.
    pub timestamp: Timestamp,
}

impl RiskAssessment {
    /// Creates an assessment, validating confidence range and the
    /// level/phrases invariant.
    pub fn new(
        level: RiskLevel,
        confidence: f32,
        matched_phrases: Vec<String>,
        timestamp: Timestamp,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::out_of_range(
                "confidence",
                0.0,
                1.0,
                confidence as f64,
            ));
        }
        if (level == RiskLevel::None) != matched_phrases.is_empty() {
            return Err(ValidationError::invalid_format(
                "matched_phrases",
                "must be empty exactly when level is none",
            ));
        }
        Ok(Self {
            level,
            confidence,
            matched_phrases,
            timestamp,
        })
    }

    /// The no-risk assessment: level None, zero confidence, no phrases.
    pub fn none(timestamp: Timestamp) -> Self {
        Self {
            level: RiskLevel::None,
            confidence: 0.0,
            matched_phrases: Vec::new(),
            timestamp,
        }
    }

    /// Returns true if the message carried any detectable risk.
    pub fn is_flagged(&self) -> bool {
        self.level > RiskLevel::None
    }
}
