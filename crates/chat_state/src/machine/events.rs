//! Chat events - Defines events that trigger state transitions

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// User submitted non-empty input and a request is about to be issued.
    UserMessageSent,

    /// The backend answered with a reply.
    ResponseReceived,

    /// The exchange failed: transport, status, decoding, timeout or cancellation.
    RequestFailed { reason: String },
}

impl ChatEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserMessageSent => "user_message_sent",
            Self::ResponseReceived => "response_received",
            Self::RequestFailed { .. } => "request_failed",
        }
    }
}
