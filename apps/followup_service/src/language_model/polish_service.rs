use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use followup_llm::{LLMClient, LLMProvider};

use super::tone::Tone;
use crate::config::{AppConfig, PolishProvider};
use crate::prompts::polish_prompt::PolishPrompt;

/// Rewrites a resolved follow-up message. Failures are returned as-is; the
/// caller decides what the lead-facing text becomes.
#[async_trait]
pub trait Polisher {
    async fn polish(&self, text: &str, context: &str, tone: Tone) -> Result<String>;
}

pub type SharedPolisher = Arc<dyn Polisher + Send + Sync>;

pub fn polisher_from_config(config: &AppConfig) -> Result<SharedPolisher> {
    match config.provider {
        PolishProvider::ChatCompletion => {
            let client = LLMClient::new(
                LLMProvider::ChatCompletion(config.chat_completion()),
                Some(config.llm_client()),
            )?;
            tracing::info!(
                endpoint = %config.endpoint_url,
                model = %config.model,
                "Polishing through chat completion endpoint"
            );
            Ok(Arc::new(LanguageModelPolisher::new(client)))
        }
        PolishProvider::Offline => {
            tracing::info!("Polishing offline, no endpoint will be called");
            Ok(Arc::new(OfflinePolisher))
        }
    }
}

pub struct LanguageModelPolisher {
    client: LLMClient,
}

impl LanguageModelPolisher {
    pub fn new(client: LLMClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Polisher for LanguageModelPolisher {
    async fn polish(&self, text: &str, context: &str, tone: Tone) -> Result<String> {
        let prompt = PolishPrompt::get_prompt(text, context, tone);
        let reply = self.client.execute_prompt(&prompt).await?;

        if reply.is_empty() {
            return Err(anyhow::anyhow!("Model returned an empty message"));
        }

        Ok(reply)
    }
}

/// Appends the tone's sign-off and the context, without calling a model.
pub struct OfflinePolisher;

#[async_trait]
impl Polisher for OfflinePolisher {
    async fn polish(&self, text: &str, context: &str, tone: Tone) -> Result<String> {
        Ok(format!(
            "{}\n\n{}\n\n(Polished with context: {})",
            text,
            tone.sign_off(),
            context
        ))
    }
}
