use chat_core::Message;

/// Change notifications for presentation shells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A message was appended at `index` of the history.
    MessageAppended { index: usize, message: Message },
    /// An exchange started (`true`) or resolved (`false`).
    BusyChanged(bool),
    PendingInputChanged(String),
    VisibilityChanged(bool),
}
