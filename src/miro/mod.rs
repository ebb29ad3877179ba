//! Miro — materialize a template as a real whiteboard.
//!
//! DESIGN
//! ======
//! `BoardApi` is the seam between board layout and HTTP. `materialize` issues
//! every call in order and stops at the first failure; items already created
//! stay on the board. Positions use Miro's centre-origin coordinates.
//!
//! ```text
//!            objective note  (y = OBJECTIVE_Y)
//!   +------------------------------------+
//!   | frame 0 (800 x 500, centre y=0)    |
//!   |  [n0] [n1] [n2] [n3] [n4]          |
//!   |  [n5] ...                          |
//!   +------------------------------------+
//!             FRAME_GAP_Y
//!   +------------------------------------+
//!   | frame 1 (centre y=600)             |
//! ```
//!
//! A frame with more than two note rows grows downward and pushes every
//! later frame down by the same amount.

pub mod client;
pub mod types;

use tracing::{debug, info};

use crate::template::{Frame, Template};
pub use client::MiroClient;
pub use types::{Board, CreatedFrame, CreatedNote, FrameRequest, Geometry, MiroError, Position, StickyNoteRequest};

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

pub const FRAME_WIDTH: f64 = 800.0;
pub const FRAME_HEIGHT: f64 = 500.0;
/// Vertical space between consecutive frames.
pub const FRAME_GAP_Y: f64 = 100.0;
pub const NOTE_STRIDE: f64 = 150.0;
/// Notes per row inside a frame.
pub const NOTES_PER_ROW: usize = 5;
/// Distance from the frame's left edge to the first note centre.
const NOTE_INSET_X: f64 = 100.0;
/// Distance from the frame's top edge to the first note row.
const NOTE_INSET_Y: f64 = 150.0;
/// Distance from the last note row to the frame's bottom edge.
const NOTE_BOTTOM_PAD: f64 = 200.0;
pub const OBJECTIVE_Y: f64 = -(FRAME_HEIGHT / 2.0) - 200.0;

pub const NOTE_COLOR: &str = "light_yellow";
pub const OBJECTIVE_COLOR: &str = "light_blue";
const NOTE_SHAPE: &str = "square";

pub const MAX_NAME_CHARS: usize = 60;
pub const MAX_DESCRIPTION_CHARS: usize = 300;

// =============================================================================
// PORT
// =============================================================================

#[async_trait::async_trait]
pub trait BoardApi: Send + Sync {
    async fn create_board(&self, name: &str, description: &str) -> Result<Board, MiroError>;

    async fn create_frame(&self, board_id: &str, request: &FrameRequest) -> Result<CreatedFrame, MiroError>;

    async fn create_sticky_note(&self, board_id: &str, request: &StickyNoteRequest) -> Result<CreatedNote, MiroError>;
}

// =============================================================================
// MATERIALIZE
// =============================================================================

/// Create a board for `template` with one frame per structure frame and one
/// sticky note per element.
///
/// # Errors
///
/// Returns the first [`MiroError`] any call produces.
pub async fn materialize(api: &dyn BoardApi, template: &Template) -> Result<Board, MiroError> {
    let name = truncate(&template.title, MAX_NAME_CHARS);
    let description = truncate(&template.objective, MAX_DESCRIPTION_CHARS);
    let board = api.create_board(&name, &description).await?;
    info!(board_id = %board.id, "miro: board created");

    let objective = StickyNoteRequest::new(
        &format!("🎯 {}", template.objective),
        NOTE_SHAPE,
        OBJECTIVE_COLOR,
        Position { x: 0.0, y: OBJECTIVE_Y },
    );
    api.create_sticky_note(&board.id, &objective).await?;

    let slots = frame_slots(&template.structure.frames);
    let mut notes = 0usize;
    for (frame, slot) in template.structure.frames.iter().zip(slots) {
        let request = FrameRequest::new(&frame.name, slot.position, slot.geometry);
        let created = api.create_frame(&board.id, &request).await?;
        debug!(frame_id = %created.id, name = %frame.name, "miro: frame created");

        for (j, element) in frame.elements.iter().enumerate() {
            let position = note_position(created.position, slot.geometry.height, j);
            let note = StickyNoteRequest::new(element, NOTE_SHAPE, NOTE_COLOR, position);
            api.create_sticky_note(&board.id, &note).await?;
            notes += 1;
        }
    }

    info!(
        board_id = %board.id,
        frames = template.structure.frames.len(),
        notes,
        "miro: board populated"
    );
    Ok(board)
}

/// Where a frame goes and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSlot {
    pub position: Position,
    pub geometry: Geometry,
}

/// Stack `frames` top to bottom, each sized for its notes.
///
/// The first frame is centred on the origin; each later frame starts
/// `FRAME_GAP_Y` below the previous frame's bottom edge.
#[must_use]
pub fn frame_slots(frames: &[Frame]) -> Vec<FrameSlot> {
    let mut top = -FRAME_HEIGHT / 2.0;
    frames
        .iter()
        .map(|frame| {
            let height = frame_height(frame.elements.len());
            let slot = FrameSlot {
                position: Position { x: 0.0, y: top + height / 2.0 },
                geometry: Geometry { width: FRAME_WIDTH, height },
            };
            top += height + FRAME_GAP_Y;
            slot
        })
        .collect()
}

/// Frame height for `count` notes: `FRAME_HEIGHT` up to two rows, taller after.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn frame_height(count: usize) -> f64 {
    let rows = count.div_ceil(NOTES_PER_ROW).max(1);
    let needed = NOTE_INSET_Y + (rows - 1) as f64 * NOTE_STRIDE + NOTE_BOTTOM_PAD;
    needed.max(FRAME_HEIGHT)
}

/// Centre of the `index`-th note inside a frame of `height` centred at `frame`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn note_position(frame: Position, height: f64, index: usize) -> Position {
    let col = (index % NOTES_PER_ROW) as f64;
    let row = (index / NOTES_PER_ROW) as f64;
    let left = frame.x - FRAME_WIDTH / 2.0;
    let top = frame.y - height / 2.0;
    Position { x: left + NOTE_INSET_X + col * NOTE_STRIDE, y: top + NOTE_INSET_Y + row * NOTE_STRIDE }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
