//! Completion — text-completion backends for template generation.
//!
//! DESIGN
//! ======
//! `CompletionClient` dispatches to the edge-function proxy, to the
//! Anthropic API directly, or to the offline mock, based on
//! `COMPLETION_PROVIDER`. Callers depend on
//! the `CompletionBackend` trait so the generator can be driven by mocks.

pub mod anthropic;
pub mod config;
pub mod mock;
pub mod proxy;
pub mod types;

use config::{CompletionConfig, ProviderKind};
pub use types::{CompletionBackend, CompletionError};
use types::CompletionParams;

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete completion client for one configured provider.
pub struct CompletionClient {
    inner: Provider,
    label: &'static str,
}

enum Provider {
    Proxy(proxy::ProxyClient),
    Anthropic(anthropic::AnthropicClient),
    Mock(mock::MockClient),
}

impl CompletionClient {
    /// Build a client from a parsed config.
    ///
    /// Returns `Ok(None)` when the provider is `none`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: &CompletionConfig) -> Result<Option<Self>, CompletionError> {
        let client = match config.provider {
            ProviderKind::None => return Ok(None),
            ProviderKind::Proxy => Self {
                inner: Provider::Proxy(proxy::ProxyClient::new(&config.base_url, config.api_key.clone(), config.timeouts)?),
                label: "proxy",
            },
            ProviderKind::Anthropic => Self {
                inner: Provider::Anthropic(anthropic::AnthropicClient::new(
                    config.api_key.clone(),
                    config.model.clone(),
                    config.timeouts,
                )?),
                label: "anthropic",
            },
            ProviderKind::Mock => Self { inner: Provider::Mock(mock::MockClient::new()), label: "mock" },
        };
        Ok(Some(client))
    }

    /// Short provider name for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

#[async_trait::async_trait]
impl CompletionBackend for CompletionClient {
    async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, CompletionError> {
        match &self.inner {
            Provider::Proxy(c) => c.complete(prompt, params).await,
            Provider::Anthropic(c) => c.complete(prompt, params).await,
            Provider::Mock(c) => c.complete(prompt, params),
        }
    }
}
