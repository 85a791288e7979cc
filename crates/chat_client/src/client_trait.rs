use async_trait::async_trait;

use crate::api::models::{ChatRequest, ChatResponse};
use crate::error::ClientError;

/// The remote chat service as seen by the session controller.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Issue exactly one request and wait for its single, complete response.
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse, ClientError>;
}
