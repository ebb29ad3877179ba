use super::*;
use crate::fallback;

fn template(idea: &str) -> Template {
    fallback::generate(idea).into_template("id".into(), "2025-01-01T00:00:00Z".into())
}

#[test]
fn svg_is_well_formed_document() {
    let svg = render_svg(&template("retrospectiva"));
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn svg_draws_every_frame_and_note() {
    let t = template("retrospectiva");
    let svg = render_svg(&t);
    for frame in &t.structure.frames {
        assert!(svg.contains(&escape(&frame.name)), "missing frame {}", frame.name);
    }
    assert_eq!(svg.matches("<g transform=\"rotate(").count(), t.element_count());
}

#[test]
fn svg_escapes_markup() {
    let mut t = template("x");
    t.title = "A <b> & \"C\"".into();
    let svg = render_svg(&t);
    assert!(svg.contains("A &lt;b&gt; &amp; &quot;C&quot;"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn wrap_breaks_on_width() {
    assert_eq!(wrap("Objetivo da sessão", 14, 6), vec!["Objetivo da", "sessão"]);
}

#[test]
fn wrap_keeps_long_words_whole() {
    assert_eq!(wrap("Responsabilidades", 5, 6), vec!["Responsabilidades"]);
}

#[test]
fn wrap_truncates_with_ellipsis() {
    let lines = wrap("a b c d e f", 1, 3);
    assert_eq!(lines, vec!["a", "b", "c…"]);
}
