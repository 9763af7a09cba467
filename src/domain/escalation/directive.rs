//! Intervention directive - the authoritative verdict handed to the UI.

use serde::{Deserialize, Serialize};

/// Escalation tier of an intervention.
///
/// Totally ordered `None < Low < Medium < High`; the policy merges
/// message-level and behavioral verdicts with `max`, which is what makes
/// "never downgrade a High" structural.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum InterventionTier {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// What triggered the intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterventionReason {
    /// Message-level classification alone.
    Message,
    /// Behavioral escalation alone.
    Behavioral,
    /// Both contributed.
    Both,
}

/// The authoritative verdict the UI collaborator must honor.
///
/// The UI decides *how* to render mandatory vs. dismissible, never whether.
/// `mandatory` and `dismissible` cannot be set independently: the only
/// constructors are [`InterventionDirective::mandatory`],
/// [`InterventionDirective::dismissible`], and
/// [`InterventionDirective::none`], so a `mandatory && dismissible`
/// directive is unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionDirective {
    tier: InterventionTier,
    mandatory: bool,
    dismissible: bool,
    reason: InterventionReason,
}

impl InterventionDirective {
    /// A mandatory, non-dismissible directive. Used only for High tier.
    pub fn mandatory(tier: InterventionTier, reason: InterventionReason) -> Self {
        Self {
            tier,
            mandatory: true,
            dismissible: false,
            reason,
        }
    }

    /// A dismissible, non-mandatory directive.
    pub fn dismissible(tier: InterventionTier, reason: InterventionReason) -> Self {
        Self {
            tier,
            mandatory: false,
            dismissible: true,
            reason,
        }
    }

    /// The silent no-intervention directive.
    pub fn none() -> Self {
        Self {
            tier: InterventionTier::None,
            mandatory: false,
            dismissible: false,
            reason: InterventionReason::Message,
        }
    }

    pub fn tier(&self) -> InterventionTier {
        self.tier
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    pub fn reason(&self) -> InterventionReason {
        self.reason
    }

    /// True if something must be shown to the user.
    pub fn requires_ui(&self) -> bool {
        self.tier > InterventionTier::None
    }
}
