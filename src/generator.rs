//! Generator service — idea → prompt → completion or fallback → template.
//!
//! DESIGN
//! ======
//! The remote backend is best effort. Any failure on that path (transport,
//! status, unparseable or incomplete JSON) is logged and replaced by the
//! keyword fallback, so the only error a caller ever sees is an empty idea.
//! Identity (id, timestamp) is stamped last through injected sources so
//! tests can pin them.

use std::sync::Arc;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::completion::config::CompletionConfig;
use crate::completion::types::CompletionParams;
use crate::completion::{CompletionBackend, CompletionClient, CompletionError};
use crate::fallback;
use crate::prompt;
use crate::template::{Template, TemplateDraft};

/// Produces template ids.
pub type IdSource = Box<dyn Fn() -> String + Send + Sync>;
/// Produces `createdAt` timestamps.
pub type Clock = Box<dyn Fn() -> String + Send + Sync>;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("idea is empty")]
    EmptyIdea,
}

/// Which path produced a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Remote,
    Fallback,
}

#[derive(Debug)]
pub struct Generated {
    pub template: Template,
    pub origin: Origin,
}

// =============================================================================
// GENERATOR
// =============================================================================

pub struct Generator {
    backend: Option<Arc<dyn CompletionBackend>>,
    params: CompletionParams,
    ids: IdSource,
    clock: Clock,
}

impl Generator {
    /// A generator using `backend` when present, fallback otherwise.
    #[must_use]
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>) -> Self {
        Self {
            backend,
            params: CompletionParams::default(),
            ids: Box::new(|| uuid::Uuid::new_v4().to_string()),
            clock: Box::new(now_rfc3339),
        }
    }

    /// A generator over the configured completion provider.
    ///
    /// A missing config, the `none` provider, or a client that fails to
    /// build all yield a fallback-only generator; the failure is logged.
    #[must_use]
    pub fn from_config(config: Option<&CompletionConfig>) -> Self {
        match config {
            Some(config) => Self::from_built(CompletionClient::from_config(config), config.params),
            None => Self::new(None),
        }
    }

    fn from_built(built: Result<Option<CompletionClient>, CompletionError>, params: CompletionParams) -> Self {
        match built {
            Ok(Some(client)) => {
                info!(provider = client.label(), "generator: using completion backend");
                let backend: Arc<dyn CompletionBackend> = Arc::new(client);
                Self::new(Some(backend)).with_params(params)
            }
            Ok(None) => Self::new(None),
            Err(e) => {
                warn!(error = %e, "generator: completion backend unavailable, using fallback");
                Self::new(None)
            }
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_ids(mut self, ids: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Generate a template for `idea`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyIdea`] if the idea is blank.
    pub async fn generate(&self, idea: &str) -> Result<Generated, GenerateError> {
        if idea.trim().is_empty() {
            return Err(GenerateError::EmptyIdea);
        }

        let (draft, origin) = match self.remote_draft(idea).await {
            Some(draft) => (draft, Origin::Remote),
            None => (fallback::generate(idea), Origin::Fallback),
        };

        let template = draft.into_template((self.ids)(), (self.clock)());
        info!(id = %template.id, title = %template.title, ?origin, "generator: template ready");
        Ok(Generated { template, origin })
    }

    async fn remote_draft(&self, idea: &str) -> Option<TemplateDraft> {
        let backend = self.backend.as_ref()?;
        let prompt = prompt::build(idea);

        let raw = match backend.complete(&prompt, self.params).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "generator: completion failed, using fallback");
                return None;
            }
        };

        match TemplateDraft::parse(&raw) {
            Ok(draft) => Some(draft),
            Err(e) => {
                warn!(error = %e, response_len = raw.len(), "generator: unusable completion, using fallback");
                None
            }
        }
    }
}

/// Current UTC time as an RFC 3339 string.
#[must_use]
pub fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string())
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
