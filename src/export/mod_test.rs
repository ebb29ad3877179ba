use super::*;
use crate::fallback;

fn template(idea: &str) -> Template {
    fallback::generate(idea).into_template("t-42".into(), "2025-01-01T00:00:00Z".into())
}

// =============================================================================
// file names
// =============================================================================

#[test]
fn file_stem_replaces_non_ascii_alphanumerics() {
    assert_eq!(file_stem("Retrospectiva de Sprint"), "Retrospectiva_de_Sprint");
    assert_eq!(file_stem("Ideação: 2025!"), "Idea__o__2025_");
}

#[test]
fn file_names_per_format() {
    let t = template("retrospectiva");
    assert_eq!(Format::Text.file_name(&t), "Retrospectiva_de_Sprint_template.md");
    assert_eq!(Format::Json.file_name(&t), "Retrospectiva_de_Sprint_template.json");
    assert_eq!(Format::Svg.file_name(&t), "Retrospectiva_de_Sprint.svg");
}

// =============================================================================
// text
// =============================================================================

#[test]
fn text_sections_in_fixed_order() {
    let out = render(&template("retrospectiva"), Format::Text).unwrap();
    let headings = [
        "# Retrospectiva de Sprint",
        "## 🎯 Objetivo",
        "## 👥 Participantes",
        "## ⏱️ Duração",
        "## 📋 Materiais",
        "### Frames:",
        "### Conexões:",
        "## 🎪 Facilitação Passo a Passo",
        "## 🚀 Dicas para Agile Coach",
        "## 🔄 Variações Possíveis",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| out.find(h).unwrap_or_else(|| panic!("missing heading {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "headings out of order: {positions:?}");
    assert!(out.starts_with("# Retrospectiva de Sprint\n"));
}

#[test]
fn text_formats_lists_and_steps() {
    let t = template("retrospectiva");
    let out = text::render(&t);
    assert!(out.contains("Scrum Master, Product Owner, Desenvolvedores"));
    assert!(out.contains("• Sticky notes virtuais\n• Timer"));
    assert!(out.contains("**Check-in**\nAquecimento e alinhamento do clima do time\nElementos: Como você chega hoje?, "));
    assert!(out.contains("**Passo 7**: Definir ações com responsável e prazo\n⏱️ Tempo: 15 minutos\n💡 Dica: "));
    assert_eq!(out.matches("**Passo ").count(), 7);
}

#[test]
fn text_handles_empty_lists() {
    let mut t = template("x");
    t.variations.clear();
    t.structure.connections.clear();
    let out = text::render(&t);
    assert!(out.ends_with("## 🔄 Variações Possíveis\n"));
}

// =============================================================================
// json
// =============================================================================

#[test]
fn json_export_parses_back_to_same_template() {
    let t = template("daily");
    let out = render(&t, Format::Json).unwrap();
    assert!(out.contains("\n  \"id\": \"t-42\""));
    assert_eq!(Template::from_json(&out).unwrap(), t);
}

// =============================================================================
// DirSink
// =============================================================================

#[test]
fn dir_sink_writes_file() {
    let dir = std::env::temp_dir().join(format!("boardsmith-export-{}", uuid::Uuid::new_v4()));
    let sink = DirSink::new(&dir);
    let path = sink.write("a.md", b"hello").unwrap();
    assert_eq!(path, dir.join("a.md"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn dir_sink_reports_unwritable_target() {
    let file = std::env::temp_dir().join(format!("boardsmith-export-file-{}", uuid::Uuid::new_v4()));
    fs::write(&file, "occupied").unwrap();
    // A regular file cannot act as the export directory.
    let sink = DirSink::new(&file);
    assert!(matches!(sink.write("a.md", b"x"), Err(ExportError::Write { .. })));
    fs::remove_file(file).unwrap();
}
