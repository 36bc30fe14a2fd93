// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the airouter task router.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level airouter configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to the development-safe values
/// (execution disabled, mock-only).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Whether real providers run at all, and which free provider is preferred.
    #[serde(default)]
    pub execution: ExecutionConfig,

    /// Local inference endpoint settings.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Mock provider behavior.
    #[serde(default)]
    pub mock: MockConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Execution gate and free-tier selection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionConfig {
    /// When false, every task is answered by the mock provider ("dry run").
    #[serde(default)]
    pub enabled: bool,

    /// Free-tier text provider used when a policy does not allow paid providers.
    /// Recognized values: "local", "ollama", "groq". Anything else means local.
    #[serde(default = "default_text_provider")]
    pub default_text_provider: String,

    /// Redact PII from task input and prompt before it reaches a real provider.
    #[serde(default)]
    pub sanitize_input: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            default_text_provider: default_text_provider(),
            sanitize_input: false,
        }
    }
}

fn default_text_provider() -> String {
    "local".to_string()
}

/// Ollama local inference configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OllamaConfig {
    /// Base URL of the Ollama HTTP API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model tag passed to `/api/generate`.
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling cutoff.
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Maximum tokens to generate per request.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Client-level request timeout. Independent of any per-task latency budget.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_ollama_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_top_p() -> f64 {
    0.9
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_request_timeout_secs() -> u64 {
    120
}

/// Mock provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MockConfig {
    /// Actually sleep for the reported latency. Disable in tests.
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    /// Lower bound of the reported latency, in milliseconds.
    #[serde(default = "default_min_latency_ms")]
    pub min_latency_ms: u64,

    /// Upper bound of the reported latency, in milliseconds.
    #[serde(default = "default_max_latency_ms")]
    pub max_latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            simulate_latency: default_simulate_latency(),
            min_latency_ms: default_min_latency_ms(),
            max_latency_ms: default_max_latency_ms(),
        }
    }
}

fn default_simulate_latency() -> bool {
    true
}

fn default_min_latency_ms() -> u64 {
    500
}

fn default_max_latency_ms() -> u64 {
    2500
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
