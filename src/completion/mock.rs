//! Offline completion provider.
//!
//! Answers every prompt with the generic template for the quoted idea,
//! serialized the way a remote model is asked to reply. Lets the full remote
//! path (prompt, parse, validate) run without network access.

use super::types::{CompletionError, CompletionParams};
use crate::{fallback, prompt};

/// Idea used when the prompt does not carry a quoted one.
pub const DEFAULT_IDEA: &str = "sessão de brainstorming";

#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns [`CompletionError::ApiParse`] if the reply cannot be serialized.
    #[allow(clippy::unused_self)]
    pub fn complete(&self, prompt: &str, _params: CompletionParams) -> Result<String, CompletionError> {
        let idea = prompt::extract_idea(prompt).unwrap_or(DEFAULT_IDEA);
        serde_json::to_string(&fallback::generic(idea)).map_err(|e| CompletionError::ApiParse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
