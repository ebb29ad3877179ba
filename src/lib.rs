//! Boardsmith: facilitation templates for agile sessions, generated from a
//! one-line idea and exported as text, JSON, SVG or a live Miro board.

pub mod completion;
pub mod config;
pub mod export;
pub mod fallback;
pub mod generator;
pub mod history;
pub mod layout;
pub mod miro;
pub mod notify;
pub mod prompt;
pub mod storage;
pub mod suggestions;
pub mod template;

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
