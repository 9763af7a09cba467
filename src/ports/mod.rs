//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `EventPublisher` / `EventSubscriber` / `EventHandler` - crisis event
//!   stream toward moderation dashboards and audit
//! - `ModeratorNotifier` - urgent/routine alerts toward the moderation team
//! - `TrackerRegistry` - per-session behavioral tracker ownership

mod event_publisher;
mod event_subscriber;
mod moderator_notifier;
mod tracker_registry;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventHandler, EventSubscriber};
pub use moderator_notifier::{ModeratorAlert, ModeratorNotifier};
pub use tracker_registry::TrackerRegistry;
