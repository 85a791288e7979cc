//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use thiserror::Error;

use super::events::ChatEvent;
use super::states::SessionState;

/// Error type for invalid state transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} with event {event}")]
    InvalidTransition { from: SessionState, event: String },
}

/// State machine for managing the exchange lifecycle.
#[derive(Debug, Clone, Default)]
pub struct StateMachine {
    current_state: SessionState,
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state.
    pub fn state(&self) -> SessionState {
        self.current_state
    }

    /// Handle an event and return the state it led to.
    ///
    /// Events with no transition from the current state are rejected and
    /// leave the machine untouched.
    pub fn handle_event(&mut self, event: ChatEvent) -> Result<SessionState, TransitionError> {
        let from = self.current_state;
        let to = Self::compute_next_state(from, &event).ok_or_else(|| {
            TransitionError::InvalidTransition {
                from,
                event: event.name().to_string(),
            }
        })?;

        match &event {
            ChatEvent::RequestFailed { reason } => {
                tracing::debug!(?from, ?to, event = event.name(), %reason, "session transition")
            }
            _ => tracing::debug!(?from, ?to, event = event.name(), "session transition"),
        }
        self.current_state = to;
        Ok(to)
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: SessionState, event: &ChatEvent) -> Option<SessionState> {
        use ChatEvent::*;
        use SessionState::*;

        match (state, event) {
            (Idle, UserMessageSent) => Some(Sending),
            (Sending, ResponseReceived) => Some(Idle),
            (Sending, RequestFailed { .. }) => Some(Idle),
            _ => None,
        }
    }
}
