pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::HttpChatClient;
pub use api::models::{ChatRequest, ChatResponse};
pub use chat_core::Config;
pub use client_trait::ChatBackend;
pub use error::ClientError;
