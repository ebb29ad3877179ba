use super::*;

#[test]
fn info_and_alert_are_written_as_lines() {
    let notifier = ConsoleNotifier::new(Vec::new());
    notifier.info("Template salvo");
    notifier.alert("Configure o token do Miro primeiro");
    let out = String::from_utf8(notifier.into_inner()).unwrap();
    assert_eq!(out, "Template salvo\n⚠️  Configure o token do Miro primeiro\n");
}

#[test]
fn usable_as_trait_object() {
    let notifier: Box<dyn Notifier> = Box::new(ConsoleNotifier::new(Vec::new()));
    notifier.info("ok");
}
