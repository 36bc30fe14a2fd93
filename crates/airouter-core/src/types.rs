// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task, policy, and result types shared by every provider and the router.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

/// Identifies a backend in the provider registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Deterministic canned responses, never fails.
    Mock,
    /// Local inference through an Ollama endpoint.
    Ollama,
    /// Free-tier hosted inference. Recognized by selection, no backend yet.
    Groq,
    Openai,
    Anthropic,
    Gemini,
}

impl ProviderKind {
    /// Providers that bill per request.
    pub fn is_paid(self) -> bool {
        matches!(self, Self::Openai | Self::Anthropic | Self::Gemini)
    }
}

/// Content modality a provider can handle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Text,
    Json,
    Vision,
    Audio,
}

/// Caller preference for a paid backend. Only consulted when paid use is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferProvider {
    Openai,
    Anthropic,
    Gemini,
    Local,
    /// Any value the router does not recognize.
    #[serde(other)]
    Unknown,
}

/// Caller constraints and preferences guiding provider selection.
///
/// Budget and latency are signed so that out-of-range input survives
/// deserialization and can be reported by validation instead of failing parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    #[serde(default)]
    pub allow_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_provider: Option<PreferProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_latency_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_cents: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_capabilities: Option<Vec<Capability>>,
}

impl Policy {
    /// Free-first policy: no paid providers, no constraints.
    pub fn free() -> Self {
        Self::default()
    }

    /// Policy that allows paid providers, optionally naming a preferred one.
    pub fn paid(prefer: Option<PreferProvider>) -> Self {
        Self {
            allow_paid: true,
            prefer_provider: prefer,
            ..Self::default()
        }
    }

    /// Human-readable reasons this policy is invalid. Empty when valid.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if let Some(budget) = self.budget_cents.filter(|b| *b < 0) {
            violations.push(format!("budgetCents must be non-negative, got {budget}"));
        }
        if let Some(latency) = self.max_latency_ms.filter(|l| *l < 0) {
            violations.push(format!("maxLatencyMs must be non-negative, got {latency}"));
        }
        violations
    }

    /// True when no budget or latency value is negative.
    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }
}

/// Research-tenant context a task runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskContext {
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investigation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

impl TaskContext {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            ..Self::default()
        }
    }
}

/// A single request for generated content.
///
/// Built once per invocation and handed to providers by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub tool: String,
    #[serde(default)]
    pub input: Map<String, Value>,
    pub context: TaskContext,
    #[serde(default)]
    pub policy: Policy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Task {
    pub fn new(tool: impl Into<String>, context: TaskContext) -> Self {
        Self {
            tool: tool.into(),
            input: Map::new(),
            context,
            policy: Policy::default(),
            prompt: None,
        }
    }

    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input.insert(key.into(), value.into());
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// The input mapping as a JSON value (for cost estimation and prompts).
    pub fn input_value(&self) -> Value {
        Value::Object(self.input.clone())
    }
}

/// Outcome of one task invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    pub ok: bool,
    pub provider: ProviderKind,
    pub model: String,
    pub latency_ms: u64,
    pub cost_cents: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Originally selected provider when this result came from the mock fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_from: Option<ProviderKind>,
}

impl TaskResult {
    pub fn success(
        provider: ProviderKind,
        model: impl Into<String>,
        latency_ms: u64,
        cost_cents: u64,
        output: Value,
    ) -> Self {
        Self {
            ok: true,
            provider,
            model: model.into(),
            latency_ms,
            cost_cents,
            output: Some(output),
            error: None,
            fallback_from: None,
        }
    }

    pub fn failure(
        provider: ProviderKind,
        model: impl Into<String>,
        latency_ms: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            ok: false,
            provider,
            model: model.into(),
            latency_ms,
            cost_cents: 0,
            output: None,
            error: Some(error.into()),
            fallback_from: None,
        }
    }

    /// Tag a freshly built fallback result with the provider that failed.
    pub fn with_fallback_from(mut self, provider: ProviderKind) -> Self {
        self.fallback_from = Some(provider);
        self
    }
}

/// Health status reported by provider health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Provider is fully operational.
    Healthy,
    /// Provider is reachable but not fully usable.
    Degraded(String),
    /// Provider is not operational.
    Unhealthy(String),
}
