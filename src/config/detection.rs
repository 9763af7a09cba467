//! Detection thresholds and rolling-window sizes.

use serde::Deserialize;

use super::error::ValidationError;

/// Tunables for the behavioral signal tracker.
///
/// Defaults are the production policy values; every field can be
/// overridden through the environment (`HAVEN_SENTINEL__DETECTION__*`).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Maximum retained message records per session.
    pub message_history_cap: usize,

    /// Maximum retained trend samples per session.
    pub trend_cap: usize,

    /// Rapid-posting window in seconds.
    pub rapid_posting_window_secs: u64,

    /// Messages within the window that count as rapid posting.
    pub rapid_posting_threshold: usize,

    /// Trend samples examined by the escalation detector.
    pub escalation_trend_samples: usize,

    /// Repeated-crisis-language window in seconds.
    pub repetition_window_secs: u64,

    /// Medium/High messages within the window that count as repetition.
    pub repetition_threshold: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            message_history_cap: 50,
            trend_cap: 20,
            rapid_posting_window_secs: 60,
            rapid_posting_threshold: 5,
            escalation_trend_samples: 5,
            repetition_window_secs: 300,
            repetition_threshold: 3,
        }
    }
}

impl DetectionConfig {
    /// Validate threshold and window values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.message_history_cap == 0 {
            return Err(ValidationError::new(
                "detection.message_history_cap",
                "must be greater than zero",
            ));
        }
        if self.trend_cap == 0 {
            return Err(ValidationError::new(
                "detection.trend_cap",
                "must be greater than zero",
            ));
        }
        if self.rapid_posting_window_secs == 0 || self.repetition_window_secs == 0 {
            return Err(ValidationError::new(
                "detection.windows",
                "window sizes must be greater than zero",
            ));
        }
        if self.rapid_posting_threshold == 0 || self.repetition_threshold == 0 {
            return Err(ValidationError::new(
                "detection.thresholds",
                "thresholds must be greater than zero",
            ));
        }
        if self.escalation_trend_samples < 2 {
            return Err(ValidationError::new(
                "detection.escalation_trend_samples",
                "needs at least two samples to detect a trend",
            ));
        }
        if self.escalation_trend_samples > self.trend_cap {
            return Err(ValidationError::new(
                "detection.escalation_trend_samples",
                "cannot exceed trend_cap",
            ));
        }
        Ok(())
    }
}
