use anyhow::{bail, Context, Result};

use crate::assessment::engine::DEFAULT_QUESTION_TIME_LIMIT_SECS;
use crate::llm_client::DEFAULT_GEMINI_API_URL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Countdown per question, in seconds.
    pub question_time_limit_secs: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let question_time_limit_secs = std::env::var("QUESTION_TIME_LIMIT_SECS")
            .unwrap_or_else(|_| DEFAULT_QUESTION_TIME_LIMIT_SECS.to_string())
            .parse::<u32>()
            .context("QUESTION_TIME_LIMIT_SECS must be a whole number of seconds")?;
        if question_time_limit_secs == 0 {
            bail!("QUESTION_TIME_LIMIT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            question_time_limit_secs,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
