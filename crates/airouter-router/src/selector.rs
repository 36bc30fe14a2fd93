// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Policy evaluation and provider selection.
//!
//! Free-first: without `allow_paid` the configured free text provider is
//! used, and a paid backend is never chosen. With `allow_paid` the caller's
//! preference decides, defaulting to local inference.

use airouter_config::model::ExecutionConfig;
use airouter_core::{Policy, PreferProvider, ProviderKind};

/// Selection outcome with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub provider: ProviderKind,
    pub reason: &'static str,
}

/// Decide which backend services a task under `policy`.
pub fn select(policy: &Policy, execution: &ExecutionConfig) -> Selection {
    if !policy.allow_paid {
        return free_tier(&execution.default_text_provider);
    }

    match policy.prefer_provider {
        Some(PreferProvider::Openai) => Selection {
            provider: ProviderKind::Openai,
            reason: "paid allowed, caller prefers openai",
        },
        Some(PreferProvider::Anthropic) => Selection {
            provider: ProviderKind::Anthropic,
            reason: "paid allowed, caller prefers anthropic",
        },
        Some(PreferProvider::Gemini) => Selection {
            provider: ProviderKind::Gemini,
            reason: "paid allowed, caller prefers gemini",
        },
        Some(PreferProvider::Local) => Selection {
            provider: ProviderKind::Ollama,
            reason: "paid allowed, caller prefers local inference",
        },
        Some(PreferProvider::Unknown) | None => Selection {
            provider: ProviderKind::Ollama,
            reason: "paid allowed without a recognized preference, using local inference",
        },
    }
}

/// Backend name only. See [`select`].
pub fn select_provider(policy: &Policy, execution: &ExecutionConfig) -> ProviderKind {
    select(policy, execution).provider
}

/// False when the budget or latency limit is negative.
pub fn validate_policy(policy: &Policy) -> bool {
    policy.is_valid()
}

fn free_tier(default_text_provider: &str) -> Selection {
    match default_text_provider.trim().to_ascii_lowercase().as_str() {
        "local" | "ollama" => Selection {
            provider: ProviderKind::Ollama,
            reason: "free-first, configured for local inference",
        },
        "groq" => Selection {
            provider: ProviderKind::Groq,
            reason: "free-first, configured for groq",
        },
        _ => Selection {
            provider: ProviderKind::Ollama,
            reason: "free-first, unrecognized default provider, using local inference",
        },
    }
}
