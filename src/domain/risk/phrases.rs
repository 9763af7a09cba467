//! Curated phrase tiers for the text risk classifier.
//!
//! Three ordered tiers, HIGH before MEDIUM before LOW. The first tier with
//! at least one match wins outright, so any high-severity signal dominates
//! the verdict regardless of co-occurring mild language.
//!
//! Every phrase is stored in normalized form (lowercase, single spaces, no
//! trailing punctuation) so it can be compared directly against normalized
//! message text.

use super::RiskLevel;

/// Explicit self-harm or suicidal intent. Any match forces a mandatory
/// intervention.
pub const HIGH_RISK_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "suicide",
    "suicidal",
    "i want to die",
    "want to die",
    "better off dead",
    "no reason to live",
    "end it all",
    "take my own life",
    "hurt myself",
    "harm myself",
    "self harm",
    "cut myself",
    "overdose",
    "don't want to be alive",
    "goodbye forever",
];

/// Hopelessness and despair language. Supportive banner, moderators
/// notified quietly.
pub const MEDIUM_RISK_PHRASES: &[&str] = &[
    "hopeless",
    "can't go on",
    "can't do this anymore",
    "no point anymore",
    "nothing matters",
    "give up on everything",
    "worthless",
    "no way out",
    "can't take it anymore",
    "everyone would be better off without me",
    "hate myself",
    "no one would care",
    "empty inside",
    "can't cope",
];

/// General distress markers. Gentle, dismissible suggestion only.
pub const LOW_RISK_PHRASES: &[&str] = &[
    "anxious",
    "depressed",
    "overwhelmed",
    "stressed",
    "lonely",
    "so sad",
    "scared",
    "struggling",
    "can't sleep",
    "panic",
    "exhausted",
    "numb",
];

/// One ordered tier of the classifier: the phrase list plus its
/// confidence curve `min(base + step * matches, cap)`.
#[derive(Debug, Clone, Copy)]
pub struct PhraseTier {
    pub level: RiskLevel,
    pub phrases: &'static [&'static str],
    pub base_confidence: f32,
    pub per_match_bonus: f32,
    pub confidence_cap: f32,
}

impl PhraseTier {
    /// Confidence for this tier given a match count, capped.
    pub fn confidence(&self, match_count: usize) -> f32 {
        let raw = self.base_confidence + self.per_match_bonus * match_count as f32;
        raw.min(self.confidence_cap)
    }
}

/// Tiers in evaluation order: HIGH, MEDIUM, LOW.
///
/// Every curve is capped so confidence stays a valid probability for any
/// phrase list size.
pub const TIERS: &[PhraseTier] = &[
    PhraseTier {
        level: RiskLevel::High,
        phrases: HIGH_RISK_PHRASES,
        base_confidence: 0.5,
        per_match_bonus: 0.2,
        confidence_cap: 1.0,
    },
    PhraseTier {
        level: RiskLevel::Medium,
        phrases: MEDIUM_RISK_PHRASES,
        base_confidence: 0.4,
        per_match_bonus: 0.15,
        confidence_cap: 0.9,
    },
    PhraseTier {
        level: RiskLevel::Low,
        phrases: LOW_RISK_PHRASES,
        base_confidence: 0.3,
        per_match_bonus: 0.1,
        confidence_cap: 1.0,
    },
];
