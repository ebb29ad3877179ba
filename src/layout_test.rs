use super::*;
use crate::fallback;

fn frame(name: &str, count: usize) -> Frame {
    Frame {
        name: name.into(),
        description: String::new(),
        elements: (0..count).map(|i| format!("{name}-{i}")).collect(),
    }
}

#[test]
fn frames_advance_by_fixed_stride() {
    let board = layout(&[frame("a", 1), frame("b", 1), frame("c", 1)]);
    let xs: Vec<f64> = board.frames.iter().map(|f| f.rect.x).collect();
    assert_eq!(xs, vec![MARGIN, MARGIN + FRAME_STRIDE, MARGIN + 2.0 * FRAME_STRIDE]);
    assert!(board.frames.iter().all(|f| f.rect.y == MARGIN + BANNER_HEIGHT));
}

#[test]
fn notes_fill_two_column_grid() {
    let board = layout(&[frame("a", 3)]);
    let notes = &board.frames[0].notes;
    assert_eq!(notes[0].rect.y, notes[1].rect.y);
    assert!(notes[1].rect.x > notes[0].rect.x);
    assert_eq!(notes[2].rect.x, notes[0].rect.x);
    assert_eq!(notes[2].rect.y, notes[0].rect.y + NOTE_SIZE + NOTE_GAP);
}

#[test]
fn notes_stay_inside_frame_and_apart() {
    let draft = fallback::generate("qualquer coisa");
    let board = layout(&draft.structure.frames);
    for placed in &board.frames {
        for (i, a) in placed.notes.iter().enumerate() {
            assert!(placed.rect.contains(&a.rect), "note {} escapes frame {}", a.text, placed.name);
            for b in &placed.notes[i + 1..] {
                assert!(!a.rect.intersects(&b.rect));
            }
        }
    }
}

#[test]
fn frames_never_overlap() {
    let board = layout(&[frame("a", 7), frame("b", 0), frame("c", 2)]);
    for (i, a) in board.frames.iter().enumerate() {
        for b in &board.frames[i + 1..] {
            assert!(!a.rect.intersects(&b.rect));
        }
    }
}

#[test]
fn height_grows_with_rows() {
    assert_eq!(frame_height(0), frame_height(2));
    assert!(frame_height(3) > frame_height(2));
    assert_eq!(frame_height(3), frame_height(4));
}

#[test]
fn rotation_and_color_cycle_deterministically() {
    let board = layout(&[frame("a", 2), frame("b", 2)]);
    assert_eq!(board.frames[0].notes[0].color, PALETTE[0]);
    assert_eq!(board.frames[0].notes[1].color, PALETTE[1]);
    assert_eq!(board.frames[1].notes[0].color, PALETTE[1]);
    assert_eq!(board.frames[1].notes[1].rotation_deg, ROTATIONS[2]);
    assert_eq!(layout(&[frame("a", 2), frame("b", 2)]), board);
}

#[test]
fn canvas_bounds_cover_all_frames() {
    let board = layout(&[frame("a", 5), frame("b", 1)]);
    let last = board.frames.last().unwrap();
    assert_eq!(board.width, last.rect.right() + MARGIN);
    assert_eq!(board.height, board.frames[0].rect.bottom() + MARGIN);
}

#[test]
fn empty_structure_still_has_canvas() {
    let board = layout(&[]);
    assert!(board.frames.is_empty());
    assert!(board.width > 0.0 && board.height > 0.0);
}
