//! Message-level risk: the stateless text classifier and its verdict types.

mod assessment;
mod classifier;
mod level;
pub mod phrases;

pub use assessment::RiskAssessment;
pub use classifier::{normalize, TextRiskClassifier};
pub use level::RiskLevel;
