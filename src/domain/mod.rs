//! Domain layer - the crisis-detection vocabulary and rules.

pub mod behavior;
pub mod escalation;
pub mod events;
pub mod foundation;
pub mod resources;
pub mod risk;
