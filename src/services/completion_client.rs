use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::config::UpstreamConfig;

/// Why the upstream model could not produce a plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamFailure {
    #[error("OPENAI_API_KEY is not configured")]
    MissingCredential,
    #[error("upstream returned HTTP {status}")]
    Status { status: u16, body: String },
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed completion body: {0}")]
    MalformedBody(String),
}

/// Result of a single completion attempt. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Success(String),
    UpstreamUnavailable(UpstreamFailure),
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_instruction: &str, user_prompt: &str) -> CompletionOutcome;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for the OpenAI HTTP API.
pub struct OpenAiCompletionClient {
    client: Client,
    config: UpstreamConfig,
}

impl OpenAiCompletionClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    async fn send(&self, api_key: &str, system_instruction: &str, user_prompt: &str) -> CompletionOutcome {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = match self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CompletionOutcome::UpstreamUnavailable(self.classify(e)),
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {} - {}", status, error_text);
            return CompletionOutcome::UpstreamUnavailable(UpstreamFailure::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let parsed = match response.json::<ChatCompletionResponse>().await {
            Ok(parsed) => parsed,
            Err(e) if e.is_decode() => {
                return CompletionOutcome::UpstreamUnavailable(UpstreamFailure::MalformedBody(
                    e.to_string(),
                ))
            }
            Err(e) => return CompletionOutcome::UpstreamUnavailable(self.classify(e)),
        };

        match parsed.choices.into_iter().next().and_then(|choice| choice.message.content) {
            Some(content) => CompletionOutcome::Success(content),
            None => CompletionOutcome::UpstreamUnavailable(UpstreamFailure::MalformedBody(
                "response has no choices[0].message.content".to_string(),
            )),
        }
    }

    fn classify(&self, e: reqwest::Error) -> UpstreamFailure {
        if e.is_timeout() {
            error!("OpenAI API request timed out after {:?}", self.config.timeout);
            UpstreamFailure::Timeout(self.config.timeout)
        } else {
            error!("OpenAI API transport error: {}", e);
            UpstreamFailure::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn complete(&self, system_instruction: &str, user_prompt: &str) -> CompletionOutcome {
        let Some(api_key) = self.config.api_key.as_deref() else {
            error!("OpenAI API key missing; skipping upstream call");
            return CompletionOutcome::UpstreamUnavailable(UpstreamFailure::MissingCredential);
        };

        info!("Starting OpenAI API call...");
        let started = Instant::now();

        let outcome = self.send(api_key, system_instruction, user_prompt).await;

        info!(
            "OpenAI API call completed in {:.2} seconds",
            started.elapsed().as_secs_f64()
        );

        outcome
    }
}
