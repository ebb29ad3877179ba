//! SVG image export of the board preview.
//!
//! Draws the objective banner, each frame as a rounded panel, and each
//! element as a tilted sticky note, using the positions from `layout`.

use std::fmt::Write;

use crate::layout::{self, MARGIN, NotePlacement};
use crate::template::Template;

const NOTE_FONT_SIZE: f64 = 13.0;
const NOTE_LINE_HEIGHT: f64 = 16.0;
const NOTE_WRAP_CHARS: usize = 14;
const NOTE_MAX_LINES: usize = 6;

/// Render the board preview for `template` as a standalone SVG document.
#[must_use]
pub fn render_svg(template: &Template) -> String {
    let board = layout::layout(&template.structure.frames);
    let mut out = String::new();

    // fmt::Write into a String is infallible.
    let _ = write_svg(&mut out, template, &board);
    out
}

fn write_svg(out: &mut String, template: &Template, board: &layout::BoardLayout) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = board.width,
        h = board.height
    )?;
    writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;

    // Banner.
    writeln!(
        out,
        r##"<text x="{MARGIN}" y="{}" font-size="24" font-weight="bold" fill="#1f2937">{}</text>"##,
        MARGIN + 28.0,
        escape(&template.title)
    )?;
    writeln!(
        out,
        r##"<text x="{MARGIN}" y="{}" font-size="14" fill="#4b5563">{}</text>"##,
        MARGIN + 56.0,
        escape(&template.objective)
    )?;

    for frame in &board.frames {
        let r = frame.rect;
        writeln!(
            out,
            r##"<rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="#ffffff" stroke="#d1d5db"/>"##,
            r.x, r.y, r.width, r.height
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="18" font-weight="bold" fill="#1d4ed8">{}</text>"##,
            r.x + 16.0,
            r.y + 30.0,
            escape(&frame.name)
        )?;
        writeln!(
            out,
            r##"<text x="{}" y="{}" font-size="12" fill="#4b5563">{}</text>"##,
            r.x + 16.0,
            r.y + 54.0,
            escape(&frame.description)
        )?;
        for note in &frame.notes {
            write_note(out, note)?;
        }
    }

    writeln!(out, "</svg>")
}

fn write_note(out: &mut String, note: &NotePlacement) -> std::fmt::Result {
    let r = note.rect;
    let (cx, cy) = (r.x + r.width / 2.0, r.y + r.height / 2.0);
    writeln!(out, r#"<g transform="rotate({} {cx} {cy})">"#, note.rotation_deg)?;
    writeln!(
        out,
        r##"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" stroke="#00000022"/>"##,
        r.x, r.y, r.width, r.height, note.color
    )?;

    let lines = wrap(&note.text, NOTE_WRAP_CHARS, NOTE_MAX_LINES);
    #[allow(clippy::cast_precision_loss)]
    let block = lines.len() as f64 * NOTE_LINE_HEIGHT;
    let mut y = cy - block / 2.0 + NOTE_FONT_SIZE;
    for line in &lines {
        writeln!(
            out,
            r##"<text x="{cx}" y="{y}" font-size="{NOTE_FONT_SIZE}" text-anchor="middle" fill="#111827">{}</text>"##,
            escape(line)
        )?;
        y += NOTE_LINE_HEIGHT;
    }
    writeln!(out, "</g>")
}

/// Greedy word wrap by character count; overflow is cut with an ellipsis.
fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() { word.chars().count() } else { current.chars().count() + 1 + word.chars().count() };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "image_test.rs"]
mod tests;
