//! State machine module
//!
//! Contains the FSM governing one exchange at a time.

mod events;
mod states;
mod transitions;

pub use events::ChatEvent;
pub use states::SessionState;
pub use transitions::{StateMachine, TransitionError};
