use super::*;

#[test]
fn retrospective_scenario() {
    let draft = generate("Quero fazer uma retrospectiva de sprint");
    assert_eq!(draft.title, "Retrospectiva de Sprint");
    assert!(draft.participants.iter().any(|p| p == "Scrum Master"));
    assert_eq!(draft.facilitation.len(), 7);
}

#[test]
fn retrospective_ignores_case_and_surrounding_text() {
    let base = generate("retrospectiva");
    assert_eq!(generate("RETROSPECTIVA"), base);
    assert_eq!(generate("Ontem tivemos uma RetroSpectiva caótica, me ajuda?"), base);
}

#[test]
fn steps_are_numbered_in_order() {
    let draft = generate("retrospectiva");
    let numbers: Vec<u32> = draft.facilitation.iter().map(|s| s.step).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn planning_keywords() {
    assert_eq!(generate("Sessão de Planning Poker").title, "Planning Poker");
    assert_eq!(generate("estimativa de user stories").title, "Planning Poker");
}

#[test]
fn daily_keywords() {
    assert_eq!(generate("daily para time remoto").title, "Daily Standup Remoto");
    assert_eq!(generate("Stand-up rápido").title, "Daily Standup Remoto");
}

#[test]
fn brainstorm_keywords() {
    assert_eq!(generate("BRAINSTORMING de produto").title, "Brainstorming de Ideias");
    assert_eq!(generate("sessão de ideação").title, "Brainstorming de Ideias");
}

#[test]
fn first_matching_rule_wins() {
    // Both retrospective and planning keywords present; retrospective is earlier in the table.
    let draft = generate("retrospectiva do planning");
    assert_eq!(draft.title, "Retrospectiva de Sprint");
}

#[test]
fn unmatched_idea_is_interpolated_verbatim() {
    let idea = "Mapear Stakeholders do Projeto X  (Q3)";
    let draft = generate(idea);
    assert_eq!(draft.title, format!("Template: {idea}"));
    assert_eq!(draft.objective, format!("{GENERIC_OBJECTIVE_PREFIX}{idea}"));
}

#[test]
fn every_fixture_is_valid() {
    for idea in ["retrospectiva", "planning", "daily", "brainstorm", "qualquer outra coisa"] {
        let draft = generate(idea);
        assert!(draft.validate().is_ok(), "fixture for {idea:?} failed validation");
    }
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate("lean canvas"), generate("lean canvas"));
}

#[test]
fn generic_title_capitalizes_first_letter() {
    assert_eq!(generate("lean canvas para validação").title, "Template: Lean canvas para validação");
    assert_eq!(generate("ótima ideia").title, "Template: Ótima ideia");
    assert_eq!(capitalize(""), "");
}
