// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static per-provider pricing and cost estimation.
//!
//! Hosted backends bill per started 1,000 characters of the serialized task
//! input. Rates are in US cents:
//!
//! OpenAI:    2 cents / 1K chars
//! Anthropic: 3 cents / 1K chars
//! Gemini:    1 cent  / 1K chars
//!
//! Mock, local inference, and the free tier cost nothing.

use airouter_core::ProviderKind;
use serde_json::Value;

/// Characters per billing unit.
pub const CHARS_PER_UNIT: u64 = 1_000;

/// Cost in cents per started [`CHARS_PER_UNIT`] characters.
pub fn cents_per_unit(kind: ProviderKind) -> u64 {
    match kind {
        ProviderKind::Openai => 2,
        ProviderKind::Anthropic => 3,
        ProviderKind::Gemini => 1,
        ProviderKind::Mock | ProviderKind::Ollama | ProviderKind::Groq => 0,
    }
}

/// Estimate the cost in cents of sending `input` to `kind`.
///
/// Measured on the compact JSON serialization, counted in characters.
pub fn estimate_cents(kind: ProviderKind, input: &Value) -> u64 {
    let rate = cents_per_unit(kind);
    if rate == 0 {
        return 0;
    }
    let chars = input.to_string().chars().count() as u64;
    chars.div_ceil(CHARS_PER_UNIT) * rate
}
