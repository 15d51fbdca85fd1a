// src/application/ports/completion.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one chat-completion request and return the first choice's text.
    ///
    /// A successful response without content yields an empty string; callers
    /// decide what an empty answer means. Nothing is retried.
    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String>;
}
