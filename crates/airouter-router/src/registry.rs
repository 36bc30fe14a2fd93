// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of provider backends keyed by [`ProviderKind`].

use std::collections::HashMap;
use std::sync::Arc;

use airouter_config::RouterConfig;
use airouter_core::{
    Capability, HealthStatus, Provider, ProviderKind, RouterError, Task, TaskResult,
};
use airouter_ollama::OllamaProvider;
use airouter_providers::{AnthropicProvider, GeminiProvider, MockProvider, OpenAiProvider};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

/// Immutable-after-construction set of backends.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in backend.
    ///
    /// `groq` is recognized by selection but has no backend, so it is not
    /// registered. An Ollama backend that cannot be built is registered as
    /// [`Unavailable`], so dry runs still work and real runs fall back.
    pub fn from_config(config: &RouterConfig) -> Self {
        let ollama: Arc<dyn Provider> = match OllamaProvider::new(&config.ollama) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                warn!(error = %e, "ollama backend unavailable");
                Arc::new(Unavailable::new(ProviderKind::Ollama, e.to_string()))
            }
        };

        let mut registry = Self::new();
        registry.register(Arc::new(MockProvider::new(config.mock.clone())));
        registry.register(ollama);
        registry.register(Arc::new(OpenAiProvider));
        registry.register(Arc::new(AnthropicProvider));
        registry.register(Arc::new(GeminiProvider));
        registry
    }

    /// Add or replace the backend for `provider.kind()`.
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        debug!(provider = %provider.kind(), "registering provider");
        self.providers.insert(provider.kind(), provider);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn Provider>> {
        self.providers.get(&kind).cloned()
    }

    /// Registered kinds, sorted by name.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        let mut kinds: Vec<_> = self.providers.keys().copied().collect();
        kinds.sort_by_key(|k| k.to_string());
        kinds
    }

    /// Registered backends, sorted by name.
    pub fn providers(&self) -> Vec<Arc<dyn Provider>> {
        self.kinds()
            .into_iter()
            .filter_map(|kind| self.get(kind))
            .collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.kinds())
            .finish()
    }
}

/// Stand-in for a backend whose construction failed.
#[derive(Debug)]
pub struct Unavailable {
    kind: ProviderKind,
    reason: String,
}

impl Unavailable {
    pub fn new(kind: ProviderKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Provider for Unavailable {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn capabilities(&self) -> &[Capability] {
        &[]
    }

    fn estimate_cost(&self, _input: &Value) -> u64 {
        0
    }

    async fn generate(&self, _task: &Task) -> Result<TaskResult, RouterError> {
        Err(RouterError::provider(format!(
            "{} is unavailable: {}",
            self.kind, self.reason
        )))
    }

    async fn health_check(&self) -> Result<HealthStatus, RouterError> {
        Ok(HealthStatus::Unhealthy(self.reason.clone()))
    }
}
