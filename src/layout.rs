//! Layout engine: places template frames and their notes on a preview canvas.
//!
//! Frames run left to right at a fixed stride. Notes sit in a two-column grid
//! below each frame's header band, so nothing overlaps by construction. Tilt
//! and colour cycle on `(frame index + note index)` to stay deterministic.

use crate::template::Frame;

// Layout constants (in logical pixels).
pub const MARGIN: f64 = 40.0;
pub const BANNER_HEIGHT: f64 = 96.0;
pub const FRAME_WIDTH: f64 = 300.0;
pub const FRAME_GAP: f64 = 32.0;
pub const FRAME_STRIDE: f64 = FRAME_WIDTH + FRAME_GAP;
pub const HEADER_HEIGHT: f64 = 72.0;
pub const NOTE_SIZE: f64 = 120.0;
pub const NOTE_GAP: f64 = 20.0;
pub const NOTE_COLUMNS: usize = 2;

/// Sticky-note fill colours, cycled per note.
pub const PALETTE: [&str; 5] = ["#fff9b1", "#fcd5ce", "#cdb4db", "#b5ead7", "#f1fa8c"];

/// Note tilt in degrees, cycled per note.
pub const ROTATIONS: [f64; 5] = [-2.0, 1.5, -1.0, 2.0, 0.5];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    #[must_use]
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x && other.y >= self.y && other.right() <= self.right() && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotePlacement {
    pub text: String,
    pub rect: Rect,
    pub rotation_deg: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FramePlacement {
    pub name: String,
    pub description: String,
    pub rect: Rect,
    pub notes: Vec<NotePlacement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub frames: Vec<FramePlacement>,
    pub width: f64,
    pub height: f64,
}

/// Lay out `frames` on the preview canvas.
#[must_use]
pub fn layout(frames: &[Frame]) -> BoardLayout {
    let top = MARGIN + BANNER_HEIGHT;

    let placed: Vec<FramePlacement> = frames
        .iter()
        .enumerate()
        .map(|(i, frame)| {
            #[allow(clippy::cast_precision_loss)]
            let x = MARGIN + i as f64 * FRAME_STRIDE;
            let rect = Rect { x, y: top, width: FRAME_WIDTH, height: frame_height(frame.elements.len()) };
            let notes = frame
                .elements
                .iter()
                .enumerate()
                .map(|(j, text)| place_note(&rect, i, j, text))
                .collect();
            FramePlacement { name: frame.name.clone(), description: frame.description.clone(), rect, notes }
        })
        .collect();

    let right = placed.iter().map(|f| f.rect.right()).fold(MARGIN + FRAME_WIDTH, f64::max);
    let bottom = placed.iter().map(|f| f.rect.bottom()).fold(top, f64::max);

    BoardLayout { frames: placed, width: right + MARGIN, height: bottom + MARGIN }
}

/// Frame height for `count` notes; an empty frame still gets one row.
#[must_use]
pub fn frame_height(count: usize) -> f64 {
    let rows = count.div_ceil(NOTE_COLUMNS).max(1);
    #[allow(clippy::cast_precision_loss)]
    let rows = rows as f64;
    HEADER_HEIGHT + rows * (NOTE_SIZE + NOTE_GAP) + NOTE_GAP
}

fn place_note(frame: &Rect, frame_index: usize, note_index: usize, text: &str) -> NotePlacement {
    let col = note_index % NOTE_COLUMNS;
    let row = note_index / NOTE_COLUMNS;
    #[allow(clippy::cast_precision_loss)]
    let (col, row) = (col as f64, row as f64);
    let cycle = frame_index + note_index;

    NotePlacement {
        text: text.to_string(),
        rect: Rect {
            x: frame.x + NOTE_GAP + col * (NOTE_SIZE + NOTE_GAP),
            y: frame.y + HEADER_HEIGHT + NOTE_GAP + row * (NOTE_SIZE + NOTE_GAP),
            width: NOTE_SIZE,
            height: NOTE_SIZE,
        },
        rotation_deg: ROTATIONS[cycle % ROTATIONS.len()],
        color: PALETTE[cycle % PALETTE.len()],
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
