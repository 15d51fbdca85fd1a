use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::completion::{CompletionClient, CompletionRequest},
};

/// Chat-completions client for an OpenAI-compatible endpoint.
///
/// One request per call, no retries, transport-default timeout.
pub struct HttpCompletionClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl HttpCompletionClient {
    pub fn new(endpoint: Url, api_key: Option<String>) -> ApplicationResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|err| ApplicationError::configuration(format!("http client: {err}")))?;
        let api_key = api_key
            .map(|key| key.trim().to_owned())
            .filter(|key| !key.is_empty());
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> ApplicationResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ApplicationError::configuration("completion API key is not set"))?;

        let body = ChatRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(model = %request.model, max_tokens = request.max_tokens, "sending completion request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ApplicationError::upstream(None, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ApplicationError::upstream(Some(status.as_u16()), detail));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::upstream(None, format!("invalid response: {err}")))?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }
}
