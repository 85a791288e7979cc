use chat_core::Message;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The text just submitted by the user.
    pub message: String,
    /// Conversation context preceding `message`.
    #[serde(default)]
    pub history: Vec<Message>,
}

/// Successful reply of the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_history_with_sender_names() {
        let request = ChatRequest {
            message: "What desserts do you offer?".to_string(),
            history: vec![Message::bot("Hello!")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "What desserts do you offer?",
                "history": [{ "sender": "bot", "text": "Hello!" }]
            })
        );
    }

    #[test]
    fn request_history_defaults_to_empty() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn response_requires_message_field() {
        assert!(serde_json::from_str::<ChatResponse>(r#"{"reply":"hi"}"#).is_err());
        assert!(serde_json::from_str::<ChatResponse>(r#"{"message":42}"#).is_err());
    }
}
