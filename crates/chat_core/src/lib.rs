//! chat_core - Core types for the menu chat widget
//!
//! This crate provides the foundational types used across all chat crates:
//! - `message` - Sender, Message and the append-only MessageStore
//! - `config` - Widget configuration (backend endpoint, timeout, canned texts)
//! - `samples` - Canned prompts offered by presentation shells

pub mod config;
pub mod message;
pub mod paths;
pub mod samples;

// Re-export commonly used types
pub use config::{Config, ConfigError, DEFAULT_FALLBACK_MESSAGE, DEFAULT_GREETING};
pub use message::{Message, MessageStore, Sender};
pub use samples::SAMPLE_PROMPTS;
