//! Completion types — provider-neutral parameters, errors, and the backend trait.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by completion client operations.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the backend failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The backend returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The backend answered with an explicit error payload.
    #[error("backend error: {message}")]
    Backend { message: String, details: Option<String> },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Generation parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_MAX_TOKENS, temperature: DEFAULT_TEMPERATURE }
    }
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Provider-neutral async trait for text completion. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send `prompt` and return the raw completion text.
    ///
    /// # Errors
    ///
    /// Returns a [`CompletionError`] if the request fails, the backend reports
    /// an error, or the response body is malformed.
    async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, CompletionError>;
}
