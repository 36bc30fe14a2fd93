// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task execution with fail-closed fallback to the mock provider.
//!
//! `run_task` always yields a result: the selected backend's on success,
//! otherwise a fresh mock result tagged with the backend that failed.

use std::borrow::Cow;

use airouter_config::RouterConfig;
use airouter_core::{Provider, ProviderKind, RouterError, Task, TaskResult};
use airouter_providers::MockProvider;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::registry::ProviderRegistry;
use crate::selector::select;

/// Executes tasks against the configured backends.
#[derive(Debug)]
pub struct TaskRunner {
    config: RouterConfig,
    registry: ProviderRegistry,
    mock: MockProvider,
}

impl TaskRunner {
    /// Runner with every built-in backend registered.
    pub fn new(config: RouterConfig) -> Self {
        let registry = ProviderRegistry::from_config(&config);
        Self::with_registry(config, registry)
    }

    /// Runner over a caller-supplied registry. The fallback mock is always
    /// built from `config.mock`.
    pub fn with_registry(config: RouterConfig, registry: ProviderRegistry) -> Self {
        let mock = MockProvider::new(config.mock.clone());
        Self {
            config,
            registry,
            mock,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run `task` on the selected provider, falling back to the mock on any failure.
    pub async fn run_task(&self, task: &Task) -> TaskResult {
        let span = info_span!(
            "run_task",
            run_id = %Uuid::new_v4(),
            tool = %task.tool,
            tenant = %task.context.tenant_id,
        );
        self.run_inner(task).instrument(span).await
    }

    async fn run_inner(&self, task: &Task) -> TaskResult {
        if !self.config.execution.enabled {
            debug!("execution disabled, answering with mock");
            return self.mock.respond(task).await;
        }

        let violations = task.policy.violations();
        if !violations.is_empty() {
            warn!(?violations, "invalid policy, routing anyway");
        }

        let selection = select(&task.policy, &self.config.execution);
        debug!(provider = %selection.provider, reason = selection.reason, "provider selected");

        let task = self.prepare(task);
        match self.attempt(selection.provider, &task).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    provider = %selection.provider,
                    error = %e,
                    "provider {} failed, falling back to mock",
                    selection.provider
                );
                self.mock
                    .respond(&task)
                    .await
                    .with_fallback_from(selection.provider)
            }
        }
    }

    /// One call to `kind`. A missing backend, an `Err`, or an `ok: false`
    /// result are all failures.
    async fn attempt(&self, kind: ProviderKind, task: &Task) -> Result<TaskResult, RouterError> {
        let provider = self
            .registry
            .get(kind)
            .ok_or(RouterError::ProviderNotRegistered { provider: kind })?;

        advise(provider.as_ref(), task);

        let result = provider.generate(task).await?;
        if !result.ok {
            return Err(RouterError::provider(
                result
                    .error
                    .unwrap_or_else(|| format!("{kind} reported failure without a message")),
            ));
        }

        info!(
            provider = %kind,
            model = %result.model,
            latency_ms = result.latency_ms,
            cost_cents = result.cost_cents,
            "task completed"
        );
        Ok(result)
    }

    /// Apply input sanitization when configured.
    fn prepare<'a>(&self, task: &'a Task) -> Cow<'a, Task> {
        if !self.config.execution.sanitize_input {
            return Cow::Borrowed(task);
        }
        let mut sanitized = task.clone();
        sanitized
            .input
            .values_mut()
            .for_each(airouter_security::sanitize_json);
        sanitized.prompt = sanitized.prompt.map(|p| airouter_security::sanitize(&p));
        debug!("task input sanitized");
        Cow::Owned(sanitized)
    }
}

/// Budget, latency, and capability limits are not enforced; report when
/// the chosen backend would not meet them.
fn advise(provider: &dyn Provider, task: &Task) {
    let policy = &task.policy;

    if let Some(budget) = policy.budget_cents.filter(|b| *b >= 0) {
        let estimate = provider.estimate_cost(&task.input_value());
        if estimate > budget.unsigned_abs() {
            debug!(
                provider = %provider.kind(),
                estimate_cents = estimate,
                budget_cents = budget,
                "estimated cost exceeds budget, not enforced"
            );
        }
    }

    if let Some(limit) = policy.max_latency_ms {
        debug!(max_latency_ms = limit, "latency limit recorded, not enforced");
    }

    if let Some(required) = &policy.required_capabilities {
        for capability in required.iter().filter(|c| !provider.supports(**c)) {
            debug!(
                provider = %provider.kind(),
                %capability,
                "provider lacks required capability, not enforced"
            );
        }
    }
}
