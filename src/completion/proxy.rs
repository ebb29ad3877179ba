//! Completion proxy client.
//!
//! Thin HTTP wrapper for an edge function at `/functions/v1/claude-chat`
//! that forwards the prompt to a model and answers `{ "response": ... }`.
//! Pure parsing in `parse_response` for testability.

use std::time::Duration;

use super::config::Timeouts;
use super::types::{CompletionError, CompletionParams};

const FUNCTION_PATH: &str = "/functions/v1/claude-chat";

// =============================================================================
// CLIENT
// =============================================================================

pub struct ProxyClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl ProxyClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, api_key: String, timeouts: Timeouts) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CompletionError::HttpClientBuild(e.to_string()))?;
        let url = format!("{}{FUNCTION_PATH}", base_url.trim_end_matches('/'));
        Ok(Self { http, url, api_key })
    }

    pub async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, CompletionError> {
        let body = ApiRequest { prompt, max_tokens: params.max_tokens, temperature: params.temperature };

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;

        parse_response(status, &text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    response: Option<String>,
    error: Option<String>,
    details: Option<String>,
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(status: u16, body: &str) -> Result<String, CompletionError> {
    let parsed: Result<ApiResponse, _> = serde_json::from_str(body);

    if !(200..300).contains(&status) {
        return Err(match parsed {
            Ok(ApiResponse { error: Some(error), details, .. }) => CompletionError::Backend { message: error, details },
            _ => CompletionError::ApiResponse { status, body: body.to_string() },
        });
    }

    let api = parsed.map_err(|e| CompletionError::ApiParse(e.to_string()))?;
    if let Some(error) = api.error {
        return Err(CompletionError::Backend { message: error, details: api.details.or(api.message) });
    }
    api.response
        .ok_or_else(|| CompletionError::ApiParse("response field missing".into()))
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
