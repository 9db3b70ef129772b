//! OpenRouter provider: a single non-streaming chat completion per request.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::provider::{GenerationError, GenerationProvider, GenerationRequest};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: String,
}

pub struct OpenRouterProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenRouterProvider {
    /// `base_url` override exists for tests against a mock server; `None`
    /// uses the public endpoint.
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerationProvider for OpenRouterProvider {
    fn name(&self) -> &str {
        "openrouter"
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::Config(
                "OpenRouter API key is not set".to_string(),
            ));
        }

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: request.model,
            messages: vec![RequestMessage {
                role: "user",
                content: request.prompt,
            }],
            max_tokens: request.max_output_tokens,
        };

        debug!(
            "POST {} (model={}, prompt_len={})",
            url,
            request.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::Parse("response contained no choices".to_string()))
    }
}
