use super::*;
use crate::ENV_LOCK;

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the env.
unsafe fn clear_app_env() {
    unsafe {
        std::env::remove_var("BOARDSMITH_DATA_DIR");
        std::env::remove_var("MIRO_TOKEN");
        std::env::remove_var("MIRO_BASE_URL");
        std::env::remove_var("COMPLETION_PROVIDER");
        std::env::remove_var("COMPLETION_API_KEY_ENV");
        std::env::remove_var("COMPLETION_BASE_URL");
    }
}

#[test]
fn explicit_values_win() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_app_env();
        std::env::set_var("BOARDSMITH_DATA_DIR", "/tmp/boardsmith-test");
        std::env::set_var("MIRO_TOKEN", " tok ");
        std::env::set_var("MIRO_BASE_URL", "https://miro.test/v2/");
        std::env::set_var("COMPLETION_PROVIDER", "none");
    }

    let cfg = AppConfig::from_env();
    assert_eq!(cfg.data_dir, PathBuf::from("/tmp/boardsmith-test"));
    assert_eq!(cfg.state_dir(), PathBuf::from("/tmp/boardsmith-test/state"));
    assert_eq!(cfg.export_dir(), PathBuf::from("/tmp/boardsmith-test/exports"));
    assert_eq!(cfg.miro_token.as_deref(), Some("tok"));
    assert_eq!(cfg.miro_base_url, "https://miro.test/v2");
    assert!(cfg.completion.is_some());

    unsafe { clear_app_env() };
}

#[test]
fn defaults_without_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        clear_app_env();
        std::env::set_var("MIRO_TOKEN", "   ");
    }

    let cfg = AppConfig::from_env();
    assert!(cfg.miro_token.is_none());
    assert_eq!(cfg.miro_base_url, DEFAULT_MIRO_BASE_URL);
    assert!(cfg.data_dir.ends_with("boardsmith") || cfg.data_dir.ends_with(".boardsmith"));
    // Default proxy provider without key or URL cannot be built.
    assert!(cfg.completion.is_none());

    unsafe { clear_app_env() };
}

#[test]
fn blank_data_dir_falls_back() {
    assert_eq!(data_dir(Some("/srv/x".into())), PathBuf::from("/srv/x"));
    assert_ne!(data_dir(Some("  ".into())), PathBuf::from("  "));
}
