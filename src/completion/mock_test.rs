use super::*;
use crate::template::TemplateDraft;

#[test]
fn reply_is_generic_template_for_quoted_idea() {
    let reply = MockClient::new()
        .complete(&prompt::build("mapa de empatia"), CompletionParams::default())
        .unwrap();
    let draft = TemplateDraft::parse(&reply).unwrap();
    assert_eq!(draft.title, "Template: Mapa de empatia");
    assert_eq!(draft.objective, format!("{}mapa de empatia", fallback::GENERIC_OBJECTIVE_PREFIX));
    assert_eq!(draft.facilitation.len(), 6);
}

#[test]
fn prompt_without_idea_uses_default() {
    let reply = MockClient::new()
        .complete("sem ideia aqui", CompletionParams::default())
        .unwrap();
    let draft = TemplateDraft::parse(&reply).unwrap();
    assert!(draft.objective.ends_with(DEFAULT_IDEA));
}

#[tokio::test]
async fn mock_provider_drives_remote_generation_path() {
    use std::sync::Arc;

    use crate::completion::config::{CompletionConfig, ProviderKind, Timeouts};
    use crate::completion::{CompletionBackend, CompletionClient};
    use crate::generator::{Generator, Origin};

    let config = CompletionConfig {
        provider: ProviderKind::Mock,
        api_key: String::new(),
        base_url: String::new(),
        model: String::new(),
        params: CompletionParams::default(),
        timeouts: Timeouts { request_secs: 1, connect_secs: 1 },
    };
    let client = CompletionClient::from_config(&config).unwrap().unwrap();
    assert_eq!(client.label(), "mock");

    let backend: Arc<dyn CompletionBackend> = Arc::new(client);
    let generated = Generator::new(Some(backend)).generate("roadmap trimestral").await.unwrap();
    assert_eq!(generated.origin, Origin::Remote);
    assert_eq!(generated.template.title, "Template: Roadmap trimestral");
}
