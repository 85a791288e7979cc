//! Message module - Chat messages and the message store
//!
//! A message is immutable once created; the store only ever appends.

mod store;

pub use store::MessageStore;

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Whether messages from this sender belong in the conversation context
    /// sent to the backend.
    pub fn is_chat(&self) -> bool {
        matches!(self, Sender::User | Sender::Bot)
    }
}

/// A single entry of the message thread.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// Create a user message from raw input.
    ///
    /// The text is trimmed; returns `None` when nothing is left.
    pub fn user(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            sender: Sender::User,
            text: trimmed.to_string(),
        })
    }

    /// Create a bot message. Backend text is stored as received.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_trimmed() {
        let msg = Message::user("  What desserts do you offer?\n").unwrap();
        assert_eq!(msg.text(), "What desserts do you offer?");
        assert_eq!(msg.sender(), Sender::User);
    }

    #[test]
    fn blank_user_message_is_rejected() {
        assert!(Message::user("").is_none());
        assert!(Message::user("   \t ").is_none());
    }

    #[test]
    fn sender_uses_lowercase_wire_names() {
        let json = serde_json::to_value(Message::bot("Hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "sender": "bot", "text": "Hi" }));

        let parsed: Message =
            serde_json::from_str(r#"{"sender":"user","text":"hello"}"#).unwrap();
        assert_eq!(parsed.sender(), Sender::User);
    }

    #[test]
    fn unknown_sender_is_rejected() {
        let parsed = serde_json::from_str::<Message>(r#"{"sender":"system","text":"x"}"#);
        assert!(parsed.is_err());
    }
}
