use std::sync::Arc;

use crate::llm::LLMProvider;
use crate::prompt::SYSTEM_PROMPT;

pub struct AppState {
    pub llm: Arc<dyn LLMProvider>,
    pub system_prompt: String,
}

impl AppState {
    /// State using the built-in restaurant knowledge base as system prompt.
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self {
            llm,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }
}
