//! MessageStore - Ordered, append-only message log

use super::Message;

/// Ordered log of exchanged messages. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Create a store seeded with a single bot greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::bot(greeting)],
        }
    }

    /// Append a message at the end of the log and return its index.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    /// Read-only view of the whole log.
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    /// Messages that belong in the conversation context sent to the backend.
    pub fn chat_context(&self) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|msg| msg.sender().is_chat())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Sender;

    #[test]
    fn greeting_seeds_exactly_one_bot_message() {
        let store = MessageStore::with_greeting("Hello!");
        assert_eq!(store.snapshot(), &[Message::bot("Hello!")]);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = MessageStore::with_greeting("Hello!");
        let first = store.append(Message::user("one").unwrap());
        let second = store.append(Message::bot("two"));

        assert_eq!((first, second), (1, 2));
        let texts: Vec<&str> = store.snapshot().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["Hello!", "one", "two"]);
        assert_eq!(store.snapshot().last().map(Message::sender), Some(Sender::Bot));
    }

    #[test]
    fn chat_context_keeps_user_and_bot_messages() {
        let mut store = MessageStore::with_greeting("Hello!");
        store.append(Message::user("hi").unwrap());
        assert_eq!(store.chat_context(), store.snapshot().to_vec());
    }
}
