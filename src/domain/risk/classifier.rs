//! Text risk classifier.
//!
//! Stateless, deterministic, no I/O: normalizes one message and scores it
//! against the ordered phrase tiers. Matching is plain substring
//! containment on normalized text; a word-boundary pass would only hit a
//! subset of the same phrases, so the broader check alone is kept.

use crate::domain::foundation::Timestamp;

use super::phrases::TIERS;
use super::RiskAssessment;

/// Classifies a single message against the phrase tiers.
///
/// Pure and infallible: empty or whitespace-only input yields the
/// no-risk assessment.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRiskClassifier;

impl TextRiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Scores a message, stamping the assessment with `timestamp`.
    ///
    /// Tiers are evaluated HIGH before MEDIUM before LOW; the first tier
    /// with at least one match wins outright and lower tiers are ignored.
    pub fn classify(&self, text: &str, timestamp: Timestamp) -> RiskAssessment {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return RiskAssessment::none(timestamp);
        }

        for tier in TIERS {
            let matched: Vec<String> = tier
                .phrases
                .iter()
                .filter(|phrase| normalized.contains(*phrase))
                .map(|phrase| phrase.to_string())
                .collect();

            if !matched.is_empty() {
                let confidence = tier.confidence(matched.len());
                // Invariant holds by construction: matched is non-empty and
                // tier levels are never None, so this cannot fail.
                return RiskAssessment::new(tier.level, confidence, matched, timestamp)
                    .unwrap_or_else(|_| RiskAssessment::none(timestamp));
            }
        }

        RiskAssessment::none(timestamp)
    }

    /// Convenience wrapper stamping the assessment with the current time.
    pub fn classify_now(&self, text: &str) -> RiskAssessment {
        self.classify(text, Timestamp::now())
    }
}

/// Normalizes message text for matching: lowercase, trim, collapse
/// internal whitespace runs to single spaces, strip trailing `.,!?;`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    // Stripping punctuation can re-expose trailing whitespace ("a ."), so
    // whitespace is stripped together with the punctuation set.
    collapsed
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::phrases::{HIGH_RISK_PHRASES, LOW_RISK_PHRASES};
    use crate::domain::risk::RiskLevel;
    use proptest::prelude::*;

    fn ts() -> Timestamp {
        Timestamp::from_unix_secs(1705276800)
    }

    fn classify(text: &str) -> RiskAssessment {
        TextRiskClassifier::new().classify(text, ts())
    }

    mod normalization {
        use super::*;

        #[test]
        fn lowercases_and_trims() {
            assert_eq!(normalize("  I Want TO Die  "), "i want to die");
        }

        #[test]
        fn collapses_internal_whitespace() {
            assert_eq!(normalize("i\tfeel   hopeless\n now"), "i feel hopeless now");
        }

        #[test]
        fn strips_trailing_punctuation() {
            assert_eq!(normalize("i feel hopeless!!?."), "i feel hopeless");
        }

        #[test]
        fn keeps_internal_punctuation() {
            assert_eq!(normalize("can't cope, really"), "can't cope, really");
        }

        #[test]
        fn empty_input_normalizes_to_empty() {
            assert_eq!(normalize(""), "");
            assert_eq!(normalize("   \n\t  "), "");
        }
    }

    mod tier_priority {
        use super::*;

        #[test]
        fn every_high_phrase_classifies_high() {
            for phrase in HIGH_RISK_PHRASES {
                let assessment = classify(phrase);
                assert_eq!(
                    assessment.level,
                    RiskLevel::High,
                    "phrase {phrase:?} did not classify high"
                );
            }
        }

        #[test]
        fn high_phrase_dominates_co_occurring_low_phrase() {
            let assessment = classify("I'm so anxious I want to die");
            assert_eq!(assessment.level, RiskLevel::High);
            // Lower-tier matches are ignored once a higher tier matched.
            assert!(assessment
                .matched_phrases
                .iter()
                .all(|p| !LOW_RISK_PHRASES.contains(&p.as_str())));
        }

        #[test]
        fn high_phrase_dominates_co_occurring_medium_phrase() {
            let assessment = classify("I feel hopeless and want to die");
            assert_eq!(assessment.level, RiskLevel::High);
        }
    }

    mod verdicts {
        use super::*;

        #[test]
        fn detects_high_risk_with_expected_match() {
            let assessment = classify("I want to die tonight");
            assert_eq!(assessment.level, RiskLevel::High);
            assert!(assessment
                .matched_phrases
                .contains(&"i want to die".to_string()));
        }

        #[test]
        fn detects_medium_risk_with_two_match_confidence() {
            let assessment = classify("I feel hopeless and can't do this anymore");
            assert_eq!(assessment.level, RiskLevel::Medium);
            assert_eq!(assessment.matched_phrases.len(), 2);
            // 0.4 + 0.15 * 2
            assert!((assessment.confidence - 0.7).abs() < 1e-6);
        }

        #[test]
        fn detects_low_risk_distress() {
            let assessment = classify("I'm feeling really anxious today");
            assert_eq!(assessment.level, RiskLevel::Low);
            assert!((assessment.confidence - 0.4).abs() < 1e-6);
        }

        #[test]
        fn benign_text_yields_none() {
            let assessment = classify("the weather is lovely today");
            assert_eq!(assessment.level, RiskLevel::None);
            assert_eq!(assessment.confidence, 0.0);
            assert!(assessment.matched_phrases.is_empty());
        }

        #[test]
        fn empty_text_yields_none() {
            let assessment = classify("");
            assert_eq!(assessment.level, RiskLevel::None);
            assert_eq!(assessment.confidence, 0.0);
            assert!(assessment.matched_phrases.is_empty());
        }

        #[test]
        fn whitespace_only_text_yields_none() {
            let assessment = classify("  \n\t  ");
            assert_eq!(assessment.level, RiskLevel::None);
        }

        #[test]
        fn matching_tolerates_punctuation_and_case() {
            let assessment = classify("I WANT TO DIE!!!");
            assert_eq!(assessment.level, RiskLevel::High);
        }

        #[test]
        fn substring_match_fires_inside_longer_words_context() {
            // "overdose" matches as a substring of "overdosed".
            let assessment = classify("i nearly overdosed last year");
            assert_eq!(assessment.level, RiskLevel::High);
        }
    }

    proptest! {
        #[test]
        fn classify_never_panics(text in "\\PC{0,200}") {
            let _ = classify(&text);
        }

        #[test]
        fn normalization_is_idempotent(text in "\\PC{0,200}") {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn confidence_is_always_in_unit_range(text in "\\PC{0,200}") {
            let assessment = classify(&text);
            prop_assert!((0.0..=1.0).contains(&assessment.confidence));
        }

        #[test]
        fn matched_phrases_empty_iff_level_none(text in "\\PC{0,200}") {
            let assessment = classify(&text);
            prop_assert_eq!(
                assessment.level == RiskLevel::None,
                assessment.matched_phrases.is_empty()
            );
        }
    }
}
