//! Service configuration, read once from the environment at startup.

use std::time::Duration;

use followup_llm::{ChatCompletionConfig, LLMClientConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum PolishProvider {
    /// OpenAI-compatible HTTP endpoint.
    ChatCompletion,
    /// Local sign-off formatting, no network call.
    Offline,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub bind_address: String,
    pub provider: PolishProvider,
    pub endpoint_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key: Option<String>,
    /// Number of CRM log entries shown on the page. Export is never windowed.
    pub display_window: usize,
    /// Sessions untouched for this long are dropped.
    pub session_idle_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("LLM_PROVIDER").as_deref() {
            Some("offline") => PolishProvider::Offline,
            _ => PolishProvider::ChatCompletion,
        };

        Self {
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            bind_address: lookup("FOLLOWUP_BIND").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            provider,
            endpoint_url: lookup("LLM_ENDPOINT_URL")
                .unwrap_or_else(|| "http://localhost:11434/v1/chat/completions".to_string()),
            model: lookup("LLM_MODEL").unwrap_or_else(|| "llama3".to_string()),
            timeout: Duration::from_secs(parse_or(&lookup, "LLM_TIMEOUT_SECS", 30)),
            temperature: parse_or(&lookup, "LLM_TEMPERATURE", 0.7),
            max_tokens: parse_or(&lookup, "LLM_MAX_TOKENS", 256),
            api_key: lookup("LLM_API_KEY").filter(|key| !key.is_empty()),
            display_window: parse_or(&lookup, "CRM_LOG_DISPLAY_WINDOW", 6),
            session_idle_ttl: Duration::from_secs(
                parse_or(&lookup, "SESSION_IDLE_TTL_SECS", 3600u64).max(1),
            ),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }

    /// How often idle sessions are swept: the TTL, at most once a minute.
    pub fn session_sweep_interval(&self) -> Duration {
        self.session_idle_ttl.min(Duration::from_secs(60))
    }

    pub fn chat_completion(&self) -> ChatCompletionConfig {
        ChatCompletionConfig {
            endpoint_url: self.endpoint_url.clone(),
            api_key: self.api_key.clone(),
        }
    }

    pub fn llm_client(&self) -> LLMClientConfig {
        LLMClientConfig {
            model: self.model.clone(),
            timeout: self.timeout,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.provider, PolishProvider::ChatCompletion);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.display_window, 6);
        assert_eq!(config.session_idle_ttl, Duration::from_secs(3600));
        assert_eq!(config.session_sweep_interval(), Duration::from_secs(60));
        assert!(config.api_key.is_none());
        assert!(config.is_dev());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("LLM_PROVIDER", "offline"),
            ("LLM_ENDPOINT_URL", "http://gpu-box:8080/v1/chat/completions"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("LLM_API_KEY", "sk-demo"),
            ("CRM_LOG_DISPLAY_WINDOW", "10"),
            ("APP_ENVIRONMENT", "production"),
        ]);
        assert_eq!(config.provider, PolishProvider::Offline);
        assert_eq!(config.endpoint_url, "http://gpu-box:8080/v1/chat/completions");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("sk-demo"));
        assert_eq!(config.display_window, 10);
        assert!(!config.is_dev());
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        let config = config_from(&[("LLM_MAX_TOKENS", "lots"), ("LLM_TEMPERATURE", "")]);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn short_session_ttl_sweeps_at_ttl_and_never_zero() {
        let config = config_from(&[("SESSION_IDLE_TTL_SECS", "20")]);
        assert_eq!(config.session_idle_ttl, Duration::from_secs(20));
        assert_eq!(config.session_sweep_interval(), Duration::from_secs(20));

        let config = config_from(&[("SESSION_IDLE_TTL_SECS", "0")]);
        assert_eq!(config.session_idle_ttl, Duration::from_secs(1));
    }
}
