//! Per-session behavioral signal tracker.
//!
//! One instance per monitored `(user, session)`. The tracker owns two
//! bounded FIFO buffers and derives rapid-posting, escalation-trend, and
//! repetition signals from them. It is deliberately clock-agnostic: every
//! operation takes the caller's timestamp, so a deployment feeds all
//! trackers from one consistent clock source and tests can inject time.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::DetectionConfig;
use crate::domain::foundation::Timestamp;
use crate::domain::risk::RiskLevel;

use super::{BehavioralAssessment, BehavioralSignals};

/// One observed message. Immutable once created; owned exclusively by the
/// tracker that recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub text: String,
    pub risk_level: RiskLevel,
    pub timestamp: Timestamp,
}

/// One trend sample: the message's risk level mapped to a 0..=3 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSample {
    pub score: u8,
    pub timestamp: Timestamp,
}

/// Stateful tracker for one session's message stream.
///
/// Not internally synchronized: callers serialize updates per session
/// (the rolling windows are order-sensitive). Distinct sessions' trackers
/// are fully independent.
#[derive(Debug, Clone)]
pub struct BehavioralSignalTracker {
    config: DetectionConfig,
    message_history: VecDeque<MessageRecord>,
    trend: VecDeque<TrendSample>,
}

impl BehavioralSignalTracker {
    /// Creates a tracker with the given detection thresholds.
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            config,
            message_history: VecDeque::with_capacity(config.message_history_cap),
            trend: VecDeque::with_capacity(config.trend_cap),
        }
    }

    /// Records one message and its classified level. O(1) amortized;
    /// both buffers evict oldest-first at their caps.
    pub fn add_message(&mut self, text: impl Into<String>, risk_level: RiskLevel, timestamp: Timestamp) {
        if self.message_history.len() == self.config.message_history_cap {
            self.message_history.pop_front();
        }
        self.message_history.push_back(MessageRecord {
            text: text.into(),
            risk_level,
            timestamp,
        });

        if self.trend.len() == self.config.trend_cap {
            self.trend.pop_front();
        }
        self.trend.push_back(TrendSample {
            score: risk_level.trend_score(),
            timestamp,
        });
    }

    /// True iff at least `rapid_posting_threshold` messages landed inside
    /// the rapid-posting window ending at `now`.
    pub fn detect_rapid_posting(&self, now: Timestamp) -> bool {
        let window = self.config.rapid_posting_window_secs;
        let recent = self
            .message_history
            .iter()
            .filter(|m| now.secs_since_saturating(&m.timestamp) < window)
            .count();
        recent >= self.config.rapid_posting_threshold
    }

    /// True iff the last `escalation_trend_samples` scores are
    /// non-decreasing and at least one reaches Medium.
    ///
    /// Requires a full window of samples; fewer means no verdict.
    pub fn detect_emotional_escalation(&self) -> bool {
        let n = self.config.escalation_trend_samples;
        if self.trend.len() < n {
            return false;
        }
        let scores: Vec<u8> = self.trend.iter().skip(self.trend.len() - n).map(|s| s.score).collect();

        let non_decreasing = scores.windows(2).all(|pair| pair[1] >= pair[0]);
        let reaches_medium = scores.iter().any(|&s| s >= RiskLevel::Medium.trend_score());
        non_decreasing && reaches_medium
    }

    /// True iff at least `repetition_threshold` Medium/High messages
    /// landed inside the repetition window ending at `now`.
    pub fn detect_repeated_crisis_language(&self, now: Timestamp) -> bool {
        let window = self.config.repetition_window_secs;
        let recent = self
            .message_history
            .iter()
            .filter(|m| m.risk_level.is_crisis())
            .filter(|m| now.secs_since_saturating(&m.timestamp) < window)
            .count();
        recent >= self.config.repetition_threshold
    }

    /// Runs all three detectors and derives the combined assessment.
    pub fn assess(&self, now: Timestamp) -> BehavioralAssessment {
        BehavioralAssessment::from_signals(BehavioralSignals {
            rapid_posting: self.detect_rapid_posting(now),
            emotional_escalation: self.detect_emotional_escalation(),
            repeated_crisis_language: self.detect_repeated_crisis_language(now),
        })
    }

    /// Empties both buffers. Used on logout/session end.
    pub fn clear(&mut self) {
        self.message_history.clear();
        self.trend.clear();
    }

    /// Number of retained message records.
    pub fn message_count(&self) -> usize {
        self.message_history.len()
    }

    /// Number of retained trend samples.
    pub fn trend_len(&self) -> usize {
        self.trend.len()
    }
}

impl Default for BehavioralSignalTracker {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}
