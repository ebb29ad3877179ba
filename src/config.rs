//! Application configuration parsed from environment variables.
//!
//! Completion settings live in [`crate::completion::config`]; this layer adds
//! local state and the Miro connection.

use std::path::PathBuf;

use tracing::warn;

use crate::completion::config::CompletionConfig;
use crate::miro::client::DEFAULT_BASE_URL as DEFAULT_MIRO_BASE_URL;

const APP_DIR: &str = "boardsmith";
const LOCAL_DATA_DIR: &str = ".boardsmith";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding history state and, by default, exports.
    pub data_dir: PathBuf,
    pub miro_token: Option<String>,
    pub miro_base_url: String,
    /// `None` means every generation uses the fallback templates.
    pub completion: Option<CompletionConfig>,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// - `BOARDSMITH_DATA_DIR`: default `<platform data dir>/boardsmith`, or
    ///   `./.boardsmith` when the platform has none
    /// - `MIRO_TOKEN`: optional; blank counts as unset
    /// - `MIRO_BASE_URL`: default `https://api.miro.com/v2`
    /// - `COMPLETION_*`: see [`CompletionConfig::from_env`]
    ///
    /// An invalid completion setup is logged and treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        let completion = match CompletionConfig::from_env() {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!(error = %e, "config: completion backend unavailable, using fallback templates");
                None
            }
        };

        Self {
            data_dir: data_dir(std::env::var("BOARDSMITH_DATA_DIR").ok()),
            miro_token: non_blank(std::env::var("MIRO_TOKEN").ok()),
            miro_base_url: std::env::var("MIRO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MIRO_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            completion,
        }
    }

    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("exports")
    }
}

fn data_dir(explicit: Option<String>) -> PathBuf {
    if let Some(dir) = non_blank(explicit) {
        return PathBuf::from(dir);
    }
    dirs::data_dir().map_or_else(|| PathBuf::from(LOCAL_DATA_DIR), |d| d.join(APP_DIR))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
