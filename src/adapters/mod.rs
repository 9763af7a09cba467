//! Adapters - implementations of the ports.

pub mod events;
pub mod moderation;
pub mod registry;
