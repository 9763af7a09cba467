//! Ordinal risk severity for a single message.

use serde::{Deserialize, Serialize};

/// Risk level assigned to one message's content.
///
/// Totally ordered: `None < Low < Medium < High`. The ordering is what the
/// escalation policy leans on when merging message-level and behavioral
/// verdicts, so the derive order of the variants is load-bearing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Maps the level to the trend score used by the behavioral tracker.
    ///
    /// `None→0, Low→1, Medium→2, High→3`.
    pub fn trend_score(&self) -> u8 {
        match self {
            RiskLevel::None => 0,
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Returns true for Medium or High, the levels the repetition
    /// detector counts as crisis language.
    pub fn is_crisis(&self) -> bool {
        *self >= RiskLevel::Medium
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::None => "none",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn trend_score_maps_each_level() {
        assert_eq!(RiskLevel::None.trend_score(), 0);
        assert_eq!(RiskLevel::Low.trend_score(), 1);
        assert_eq!(RiskLevel::Medium.trend_score(), 2);
        assert_eq!(RiskLevel::High.trend_score(), 3);
    }

    #[test]
    fn is_crisis_true_for_medium_and_high_only() {
        assert!(!RiskLevel::None.is_crisis());
        assert!(!RiskLevel::Low.is_crisis());
        assert!(RiskLevel::Medium.is_crisis());
        assert!(RiskLevel::High.is_crisis());
    }

    #[test]
    fn max_of_levels_picks_higher_severity() {
        assert_eq!(RiskLevel::Low.max(RiskLevel::High), RiskLevel::High);
        assert_eq!(RiskLevel::Medium.max(RiskLevel::None), RiskLevel::Medium);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn default_is_none() {
        assert_eq!(RiskLevel::default(), RiskLevel::None);
    }
}
