// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in provider backends that need no network access.
//!
//! [`MockProvider`] answers every task with a canned, structurally valid
//! payload and is the router's fallback. The paid backends declare their
//! capabilities and pricing but cannot generate yet.

pub mod mock;
pub mod paid;
pub mod pricing;

pub use mock::{MOCK_MODEL, MockProvider};
pub use paid::{AnthropicProvider, GeminiProvider, OpenAiProvider};
