//! chat_state - State machine logic for the chat widget
//!
//! This crate provides the exchange state machine (one request/response
//! in flight at a time) and the independent open/closed visibility toggle.

pub mod machine;
pub mod visibility;

// Re-export commonly used types
pub use machine::{ChatEvent, SessionState, StateMachine, TransitionError};
pub use visibility::VisibilityController;
