use super::*;
use crate::fallback;

#[test]
fn eight_suggestions_with_distinct_titles() {
    assert_eq!(SUGGESTIONS.len(), 8);
    let mut titles: Vec<_> = SUGGESTIONS.iter().map(|s| s.title).collect();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), 8);
}

#[test]
fn positions_are_one_based() {
    assert_eq!(by_position(1).map(|s| s.title), Some("Retrospectiva Sprint"));
    assert_eq!(by_position(8).map(|s| s.title), Some("Risk Assessment"));
    assert!(by_position(0).is_none());
    assert!(by_position(9).is_none());
}

#[test]
fn keyword_suggestions_hit_their_fallback() {
    let title = |n| fallback::generate(by_position(n).unwrap().idea).title;
    assert_eq!(title(1), "Retrospectiva de Sprint");
    assert_eq!(title(2), "Planning Poker");
    assert_eq!(title(3), "Daily Standup Remoto");
    assert_eq!(title(5), "Brainstorming de Ideias");
}
