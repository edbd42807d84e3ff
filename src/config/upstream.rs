use anyhow::{Context, Result};
use std::time::Duration;

/// Settings for the upstream chat-completion API.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());

        let base_url = lookup("OPENAI_API_BASE")
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());

        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4-turbo-preview".to_string());

        let temperature = lookup("OPENAI_TEMPERATURE")
            .unwrap_or_else(|| "0.7".to_string())
            .parse()
            .context("OPENAI_TEMPERATURE must be a number")?;

        let max_tokens = lookup("OPENAI_MAX_TOKENS")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("OPENAI_MAX_TOKENS must be a positive integer")?;

        let timeout_secs = lookup("OPENAI_TIMEOUT_SECS")
            .unwrap_or_else(|| "45".to_string())
            .parse()
            .context("OPENAI_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(UpstreamConfig {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn is_key_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

// Keeps the credential out of logs
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_defaults() {
        let config = UpstreamConfig::from_lookup(&|_: &str| None).unwrap();

        assert_eq!(config.completions_url(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.model, "gpt-4-turbo-preview");
        assert_eq!(config.max_tokens, 3000);
        assert_eq!(config.timeout, Duration::from_secs(45));
        assert!(!config.is_key_configured());
    }

    #[test]
    fn test_blank_key_is_not_configured() {
        let config = UpstreamConfig::from_lookup(&|key: &str| {
            (key == "OPENAI_API_KEY").then(|| "   ".to_string())
        })
        .unwrap();

        assert!(!config.is_key_configured());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = UpstreamConfig::from_lookup(&|key: &str| {
            (key == "OPENAI_API_KEY").then(|| "sk-secret".to_string())
        })
        .unwrap();

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
