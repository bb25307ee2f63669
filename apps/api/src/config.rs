use std::fmt;

use anyhow::{bail, Context, Result};

const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;

/// Application configuration loaded from environment variables.
///
/// The AI service key is optional: without it every AI call takes the
/// fallback path, which keeps the demo flows usable offline.
#[derive(Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub llm_api_url: Option<String>,
    /// First retry delay for throttled or failed AI calls, in milliseconds.
    pub llm_retry_backoff_ms: u64,
    pub port: u16,
    pub rust_log: String,
    /// Whether a finished candidate intake replaces an existing session identity.
    pub intake_overwrites_session: bool,
    /// Whether JSON views carry a `degraded` flag when an AI answer was a fallback.
    pub surface_degraded_ai: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL"),
            llm_retry_backoff_ms: optional_env("LLM_RETRY_BACKOFF_MS")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("LLM_RETRY_BACKOFF_MS must be a whole number of milliseconds")?
                .unwrap_or(DEFAULT_RETRY_BACKOFF_MS),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            intake_overwrites_session: env_flag("INTAKE_OVERWRITES_SESSION", true)?,
            surface_degraded_ai: env_flag("SURFACE_DEGRADED_AI", false)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            anthropic_api_key: None,
            llm_api_url: None,
            llm_retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
            port: 8080,
            rust_log: "info".to_string(),
            intake_overwrites_session: true,
            surface_degraded_ai: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "anthropic_api_key",
                &self.anthropic_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_retry_backoff_ms", &self.llm_retry_backoff_ms)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("intake_overwrites_session", &self.intake_overwrites_session)
            .field("surface_degraded_ai", &self.surface_degraded_ai)
            .finish()
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_flag(key: &str, default: bool) -> Result<bool> {
    match optional_env(key) {
        None => Ok(default),
        Some(raw) => parse_flag(&raw).with_context(|| format!("{key} must be true or false")),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized flag value '{other}'"),
    }
}
