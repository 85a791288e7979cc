//! Session states - Defines the possible states of a chat session

/// The exchange lifecycle of a chat session.
///
/// There is no terminal state: a session cycles between the two for as long
/// as it lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No exchange outstanding, awaiting user input.
    #[default]
    Idle,

    /// Exactly one request has been issued and its outcome is pending.
    Sending,
}

impl SessionState {
    /// Whether an exchange is outstanding.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending)
    }
}
