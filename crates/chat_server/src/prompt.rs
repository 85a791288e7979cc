use chat_core::{Message, Sender};

use crate::llm::{LlmMessage, Role};

/// Restaurant knowledge base the assistant answers from.
pub const SYSTEM_PROMPT: &str = include_str!("../prompts/system_prompt.md");

/// Assemble the completion conversation: system prompt, prior turns, then
/// the new user message.
pub fn build_messages(system_prompt: &str, history: &[Message], message: &str) -> Vec<LlmMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(LlmMessage::new(Role::System, system_prompt));
    messages.extend(
        history
            .iter()
            .filter(|msg| msg.sender().is_chat())
            .map(|msg| LlmMessage::new(role_for(msg.sender()), msg.text())),
    );
    messages.push(LlmMessage::new(Role::User, message.trim()));
    messages
}

fn role_for(sender: Sender) -> Role {
    match sender {
        Sender::User => Role::User,
        Sender::Bot => Role::Assistant,
    }
}
