//! Application layer - use case handlers.
//!
//! Handlers orchestrate the domain and the ports; they hold no business
//! rules of their own.

mod evaluate_message;

pub use evaluate_message::{
    EvaluateMessageCommand, EvaluateMessageError, EvaluateMessageHandler, EvaluationOutcome,
};
