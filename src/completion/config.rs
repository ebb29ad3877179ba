//! Completion configuration parsed from environment variables.

use super::types::{CompletionError, CompletionParams, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Edge-function proxy answering `{ "response": ... }`.
    Proxy,
    /// Anthropic Messages API called directly.
    Anthropic,
    /// Offline stand-in that answers with the generic template.
    Mock,
    /// No backend; every generation uses the fallback.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    pub provider: ProviderKind,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub params: CompletionParams,
    pub timeouts: Timeouts,
}

impl CompletionConfig {
    /// Build typed completion config from environment variables.
    ///
    /// Optional:
    /// - `COMPLETION_PROVIDER`: `proxy` (default), `anthropic`, `mock`, or `none`
    /// - `COMPLETION_API_KEY_ENV`: names the env var containing the key
    ///   (required for `proxy` and `anthropic`)
    /// - `COMPLETION_BASE_URL`: proxy base URL (required for `proxy`)
    /// - `COMPLETION_MODEL`: anthropic model, default `claude-3-sonnet-20240229`
    /// - `COMPLETION_MAX_TOKENS`: default 4000
    /// - `COMPLETION_TEMPERATURE`: default 0.7
    /// - `COMPLETION_REQUEST_TIMEOUT_SECS`: default 120
    /// - `COMPLETION_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown provider, a missing key, or a proxy
    /// provider without a base URL.
    pub fn from_env() -> Result<Self, CompletionError> {
        let provider = parse_provider(std::env::var("COMPLETION_PROVIDER").ok().as_deref())?;
        let params = CompletionParams {
            max_tokens: env_parse("COMPLETION_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            temperature: env_parse("COMPLETION_TEMPERATURE", DEFAULT_TEMPERATURE),
        };
        let timeouts = Timeouts {
            request_secs: env_parse("COMPLETION_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("COMPLETION_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let model = std::env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string());

        if matches!(provider, ProviderKind::Mock | ProviderKind::None) {
            return Ok(Self { provider, api_key: String::new(), base_url: String::new(), model, params, timeouts });
        }

        let key_var = std::env::var("COMPLETION_API_KEY_ENV")
            .map_err(|_| CompletionError::MissingApiKey { var: "COMPLETION_API_KEY_ENV".into() })?;
        let api_key = std::env::var(&key_var).map_err(|_| CompletionError::MissingApiKey { var: key_var.clone() })?;

        let base_url = match provider {
            ProviderKind::Proxy => std::env::var("COMPLETION_BASE_URL")
                .map_err(|_| CompletionError::ConfigParse("COMPLETION_BASE_URL is required for the proxy provider".into()))?
                .trim_end_matches('/')
                .to_string(),
            ProviderKind::Anthropic | ProviderKind::Mock | ProviderKind::None => String::new(),
        };

        Ok(Self { provider, api_key, base_url, model, params, timeouts })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<ProviderKind, CompletionError> {
    match raw.unwrap_or("proxy") {
        "proxy" => Ok(ProviderKind::Proxy),
        "anthropic" => Ok(ProviderKind::Anthropic),
        "mock" => Ok(ProviderKind::Mock),
        "none" => Ok(ProviderKind::None),
        other => Err(CompletionError::ConfigParse(format!("unknown COMPLETION_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
