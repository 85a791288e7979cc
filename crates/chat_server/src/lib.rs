//! chat_server - Backend for the menu chat widget
//!
//! Serves `POST /api/chat`: the widget's message plus history are turned into
//! a chat-completion request against an OpenAI-compatible LLM, and the reply
//! text is returned as `{ "message": ... }`.

pub mod error;
pub mod handlers;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod server;
pub mod state;

pub use error::AppError;
pub use llm::{GenerationParams, LLMError, LLMProvider, LlmMessage, OpenAIProvider, Role};
pub use server::{app_config, run_server, ServerConfig};
pub use state::AppState;
