//! Miro REST v2 wire types and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MiroError {
    /// No access token was configured.
    #[error("Miro token not configured")]
    MissingToken,

    /// The HTTP request failed before a response arrived.
    #[error("Miro request failed: {0}")]
    Request(String),

    /// Miro answered with a non-success status.
    #[error("failed to {action}: status {status} - {message}")]
    Api { action: &'static str, status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Miro response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SHARED
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
}

// =============================================================================
// BOARD
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Board {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "viewLink", default)]
    pub view_link: String,
}

// =============================================================================
// FRAME
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameData {
    pub title: String,
    pub format: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRequest {
    pub data: FrameData,
    pub position: Position,
    pub geometry: Geometry,
}

impl FrameRequest {
    #[must_use]
    pub fn new(title: &str, position: Position, geometry: Geometry) -> Self {
        Self { data: FrameData { title: title.to_string(), format: "custom", kind: "freeform" }, position, geometry }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedFrame {
    pub id: String,
    pub position: Position,
}

// =============================================================================
// STICKY NOTE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickyNoteData {
    pub content: String,
    pub shape: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNoteStyle {
    pub fill_color: &'static str,
    pub text_align: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StickyNoteRequest {
    pub data: StickyNoteData,
    pub style: StickyNoteStyle,
    pub position: Position,
}

impl StickyNoteRequest {
    #[must_use]
    pub fn new(content: &str, shape: &'static str, fill_color: &'static str, position: Position) -> Self {
        Self {
            data: StickyNoteData { content: content.to_string(), shape },
            style: StickyNoteStyle { fill_color, text_align: "center" },
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedNote {
    pub id: String,
}

/// Error body Miro returns on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
