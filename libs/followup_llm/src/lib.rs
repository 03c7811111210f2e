use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;

pub mod chat_completion;

pub use chat_completion::{ChatCompletionConfig, ChatCompletionService};

#[derive(Debug, Clone)]
pub enum LLMProvider {
    ChatCompletion(ChatCompletionConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A single chat-completion call against some backend.
#[async_trait]
pub trait LLMService {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct LLMClientConfig {
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LLMClientConfig {
    fn default() -> Self {
        Self {
            model: "llama3".to_string(),
            timeout: Duration::from_secs(30),
            temperature: 0.7,
            max_tokens: 256,
        }
    }
}

/// Sends one prompt per call. There is no retry: a failed or timed-out
/// attempt is returned to the caller as an error.
pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: Option<LLMClientConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::ChatCompletion(endpoint) => {
                Box::new(ChatCompletionService::new(endpoint, config.timeout)?)
            }
        };

        Ok(Self { service, config })
    }

    pub fn with_service(service: Box<dyn LLMService + Send + Sync>, config: LLMClientConfig) -> Self {
        Self { service, config }
    }

    pub async fn execute_prompt(&self, prompt: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        match timeout(self.config.timeout, self.service.complete(&request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Completion timed out after {:?}", self.config.timeout);
                Err(anyhow::anyhow!(
                    "Request timed out after {} seconds",
                    self.config.timeout.as_secs_f32()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingService {
        reply: String,
        delay: Duration,
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    #[async_trait]
    impl LLMService for RecordingService {
        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.seen.lock().unwrap().push(request.clone());
            tokio::time::sleep(self.delay).await;
            Ok(self.reply.clone())
        }
    }

    fn client(delay: Duration, seen: Arc<Mutex<Vec<CompletionRequest>>>) -> LLMClient {
        LLMClient::with_service(
            Box::new(RecordingService {
                reply: "polished".to_string(),
                delay,
                seen,
            }),
            LLMClientConfig {
                model: "test-model".to_string(),
                timeout: Duration::from_millis(200),
                temperature: 0.3,
                max_tokens: 64,
            },
        )
    }

    #[tokio::test]
    async fn builds_single_user_message_request() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = client(Duration::ZERO, seen.clone());

        let reply = client.execute_prompt("rewrite this").await.unwrap();
        assert_eq!(reply, "polished");

        let requests = seen.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "test-model");
        assert_eq!(requests[0].messages, vec![ChatMessage::user("rewrite this")]);
        assert_eq!(requests[0].temperature, 0.3);
        assert_eq!(requests[0].max_tokens, 64);
    }

    #[tokio::test]
    async fn slow_service_times_out_after_one_attempt() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = client(Duration::from_secs(5), seen.clone());

        let err = client.execute_prompt("hello").await.unwrap_err();
        assert!(err.to_string().contains("timed out"));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
