// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Paid hosted backends.
//!
//! These are registered so that selection, cost estimation, and the fallback
//! path can be exercised end to end, but none of them can generate yet:
//! `generate` always returns [`RouterError::NotImplemented`].

use airouter_core::{Capability, Provider, ProviderKind, RouterError, Task, TaskResult};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::pricing;

fn not_implemented(kind: ProviderKind, task: &Task) -> Result<TaskResult, RouterError> {
    debug!(provider = %kind, tool = %task.tool, "paid provider invoked without a backend");
    Err(RouterError::NotImplemented { provider: kind })
}

/// OpenAI chat models.
#[derive(Debug, Clone, Default)]
pub struct OpenAiProvider;

#[async_trait]
impl Provider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Openai
    }

    fn capabilities(&self) -> &[Capability] {
        &[
            Capability::Text,
            Capability::Json,
            Capability::Vision,
            Capability::Audio,
        ]
    }

    fn estimate_cost(&self, input: &Value) -> u64 {
        pricing::estimate_cents(self.kind(), input)
    }

    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError> {
        not_implemented(self.kind(), task)
    }
}

/// Anthropic Claude models.
#[derive(Debug, Clone, Default)]
pub struct AnthropicProvider;

#[async_trait]
impl Provider for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::Text, Capability::Json, Capability::Vision]
    }

    fn estimate_cost(&self, input: &Value) -> u64 {
        pricing::estimate_cents(self.kind(), input)
    }

    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError> {
        not_implemented(self.kind(), task)
    }
}

/// Google Gemini models.
#[derive(Debug, Clone, Default)]
pub struct GeminiProvider;

#[async_trait]
impl Provider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn capabilities(&self) -> &[Capability] {
        &[
            Capability::Text,
            Capability::Json,
            Capability::Vision,
            Capability::Audio,
        ]
    }

    fn estimate_cost(&self, input: &Value) -> u64 {
        pricing::estimate_cents(self.kind(), input)
    }

    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError> {
        not_implemented(self.kind(), task)
    }
}
