use std::error::Error as _;

use async_trait::async_trait;
use chat_core::Config;
use log::{debug, error, info};
use reqwest::{Client, Proxy};

use crate::api::models::{ChatRequest, ChatResponse};
use crate::client_trait::ChatBackend;
use crate::error::ClientError;

/// Talks to the chat endpoint over HTTP.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let client = Self::build_http_client(config)?;
        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Proxies come from `Config` only; its loader already folds in the
    /// `HTTP_PROXY`/`HTTPS_PROXY` environment variables.
    fn build_http_client(config: &Config) -> Result<Client, ClientError> {
        let mut builder = Client::builder().no_proxy();
        if !config.http_proxy.is_empty() {
            let proxy = Proxy::http(&config.http_proxy)
                .map_err(|e| ClientError::Build(format!("invalid HTTP proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }
        if !config.https_proxy.is_empty() {
            let proxy = Proxy::https(&config.https_proxy)
                .map_err(|e| ClientError::Build(format!("invalid HTTPS proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }
        builder
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))
    }

    fn log_transport_error(&self, e: &reqwest::Error) {
        error!("Failed HTTP request to {}: {}", self.endpoint, e);
        if let Some(source) = e.source() {
            error!("Error source: {:?}", source);
        }
        if e.is_timeout() {
            error!("Request timed out");
        }
        if e.is_connect() {
            error!("Connection error");
        }
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatResponse, ClientError> {
        info!(
            "Sending chat request to {} with {} history messages",
            self.endpoint,
            request.history.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                self.log_transport_error(&e);
                ClientError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let reply: ChatResponse =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))?;
        if reply.message.trim().is_empty() {
            return Err(ClientError::Decode("empty message".to_string()));
        }

        debug!("Chat endpoint replied with {} bytes", reply.message.len());
        Ok(reply)
    }
}
