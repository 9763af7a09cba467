//! Session-level behavioral risk: the stateful tracker and its signals.

mod assessment;
mod tracker;

pub use assessment::{BehavioralAssessment, BehavioralSignals, RiskRecommendation};
pub use tracker::{BehavioralSignalTracker, MessageRecord, TrendSample};
