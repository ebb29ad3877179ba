//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages` with a single user turn. The text
//! blocks of the reply are concatenated into one completion string.

use std::time::Duration;

use super::config::Timeouts;
use super::types::{CompletionError, CompletionParams};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, model: String, timeouts: Timeouts) -> Result<Self, CompletionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CompletionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, model })
    }

    pub async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, CompletionError> {
        let body = ApiRequest {
            model: &self.model,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            messages: [ApiMessage { role: "user", content: prompt }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CompletionError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(CompletionError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: [ApiMessage<'a>; 1],
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Unknown,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, CompletionError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| CompletionError::ApiParse(e.to_string()))?;

    let text: String = api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Unknown => None,
        })
        .collect();

    if text.is_empty() {
        return Err(CompletionError::ApiParse("response has no text content".into()));
    }
    Ok(text)
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
