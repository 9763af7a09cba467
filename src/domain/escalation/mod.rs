//! Escalation policy and the intervention directive it produces.

mod directive;
mod policy;

pub use directive::{InterventionDirective, InterventionReason, InterventionTier};
pub use policy::{EscalationPolicy, NotifyUrgency, PolicyAction, PolicyDecision};
