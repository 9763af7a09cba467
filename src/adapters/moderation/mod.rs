//! Moderator notification adapters.

mod in_memory;

pub use in_memory::InMemoryModeratorNotifier;
