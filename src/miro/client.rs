//! Miro REST v2 HTTP client.
//!
//! Each call is a single authenticated `POST`; a non-2xx status becomes
//! `MiroError::Api` carrying Miro's own `message` when the body has one.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::BoardApi;
use super::types::{Board, BoardRequest, CreatedFrame, CreatedNote, ErrorBody, FrameRequest, MiroError, StickyNoteRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.miro.com/v2";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct MiroClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl MiroClient {
    /// # Errors
    ///
    /// Returns [`MiroError::MissingToken`] for a blank token, or an error if
    /// the HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: &str) -> Result<Self, MiroError> {
        if token.trim().is_empty() {
            return Err(MiroError::MissingToken);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MiroError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), token: token.trim().to_string() })
    }

    async fn post<B, R>(&self, action: &'static str, path: &str, body: &B) -> Result<R, MiroError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, action, "miro: request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| MiroError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MiroError::Request(e.to_string()))?;

        parse_response(action, status, &text)
    }
}

#[async_trait::async_trait]
impl BoardApi for MiroClient {
    async fn create_board(&self, name: &str, description: &str) -> Result<Board, MiroError> {
        let request = BoardRequest { name: name.to_string(), description: description.to_string() };
        self.post("create board", "/boards", &request).await
    }

    async fn create_frame(&self, board_id: &str, request: &FrameRequest) -> Result<CreatedFrame, MiroError> {
        self.post("create frame", &format!("/boards/{board_id}/frames"), request)
            .await
    }

    async fn create_sticky_note(&self, board_id: &str, request: &StickyNoteRequest) -> Result<CreatedNote, MiroError> {
        self.post("create sticky note", &format!("/boards/{board_id}/sticky_notes"), request)
            .await
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response<R: DeserializeOwned>(action: &'static str, status: u16, body: &str) -> Result<R, MiroError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        return Err(MiroError::Api { action, status, message });
    }
    serde_json::from_str(body).map_err(|e| MiroError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
