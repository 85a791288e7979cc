//! Test backends for driving ChatSession deterministically

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chat_client::{ChatBackend, ChatRequest, ChatResponse, ClientError};
use tokio::sync::{mpsc, oneshot};

/// A request the session issued, waiting for the test to resolve it.
pub struct PendingExchange {
    pub request: ChatRequest,
    responder: oneshot::Sender<Result<ChatResponse, ClientError>>,
}

impl PendingExchange {
    pub fn reply(self, text: &str) {
        let _ = self.responder.send(Ok(ChatResponse {
            message: text.to_string(),
        }));
    }

    pub fn fail(self, error: ClientError) {
        let _ = self.responder.send(Err(error));
    }
}

/// Hands every request to the test through a channel.
pub struct ScriptedBackend {
    tx: mpsc::UnboundedSender<PendingExchange>,
}

pub fn scripted() -> (Arc<ScriptedBackend>, mpsc::UnboundedReceiver<PendingExchange>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(ScriptedBackend { tx }), rx)
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse, ClientError> {
        let (responder, rx) = oneshot::channel();
        self.tx
            .send(PendingExchange { request, responder })
            .map_err(|_| ClientError::Decode("test harness gone".to_string()))?;
        rx.await
            .unwrap_or_else(|_| Err(ClientError::Decode("responder dropped".to_string())))
    }
}

/// Never answers.
pub struct HangingBackend;

#[async_trait]
impl ChatBackend for HangingBackend {
    async fn send_chat(&self, _request: ChatRequest) -> Result<ChatResponse, ClientError> {
        std::future::pending().await
    }
}

/// Answers every request at once with the same reply.
pub struct InstantBackend(pub &'static str);

#[async_trait]
impl ChatBackend for InstantBackend {
    async fn send_chat(&self, _request: ChatRequest) -> Result<ChatResponse, ClientError> {
        Ok(ChatResponse {
            message: self.0.to_string(),
        })
    }
}
