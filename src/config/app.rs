use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use super::upstream::UpstreamConfig;

const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub public_base_url: String,
    pub well_known_dir: PathBuf,
    pub redact_internal_errors: bool,
    pub max_body_bytes: usize,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .context("PORT must be a valid port number")?;
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let public_base_url = lookup("PUBLIC_BASE_URL")
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        let well_known_dir = lookup("WELL_KNOWN_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./.well-known"));

        // Production hides internal fault text unless explicitly overridden
        let redact_internal_errors = match lookup("REDACT_INTERNAL_ERRORS") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("REDACT_INTERNAL_ERRORS is not a boolean: {}", value))?,
            None => environment == "production",
        };

        let max_body_bytes = lookup("MAX_BODY_BYTES")
            .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
            .parse()
            .context("MAX_BODY_BYTES must be a whole number of bytes")?;

        let upstream = UpstreamConfig::from_lookup(&lookup)?;

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            well_known_dir,
            redact_internal_errors,
            max_body_bytes,
            upstream,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public URL of the task endpoint, advertised in the capability descriptor.
    pub fn task_endpoint_url(&self) -> String {
        format!("{}/tasks/send", self.public_base_url)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
