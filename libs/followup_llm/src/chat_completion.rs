use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::{CompletionRequest, LLMService};

#[derive(Debug, Clone)]
pub struct ChatCompletionConfig {
    pub endpoint_url: String,
    /// Sent as a bearer token when present. Local endpoints usually need none.
    pub api_key: Option<String>,
}

/// OpenAI-compatible `chat/completions` endpoint (vLLM, TGI, Ollama, Groq...).
pub struct ChatCompletionService {
    client: Client,
    config: ChatCompletionConfig,
}

impl ChatCompletionService {
    pub fn new(config: ChatCompletionConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LLMService for ChatCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let mut builder = self.client.post(&self.config.endpoint_url).json(request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .context("Failed to send request to chat completion endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "API returned error status: {}, body: {}",
                status,
                error_text
            ));
        }

        let result: Value = response
            .json()
            .await
            .context("Failed to parse chat completion response")?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .context("Invalid response format: missing choices[0].message.content")?;

        Ok(content.trim().to_string())
    }
}
