// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the airouter task router.

use thiserror::Error;

use crate::types::ProviderKind;

/// The primary error type used across the provider trait and router operations.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Configuration errors (invalid TOML, bad endpoint URL, out-of-range values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider-level failure (transport error, bad status, malformed body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider exists as a stub and cannot generate anything yet.
    #[error("provider `{provider}` is not implemented")]
    NotImplemented { provider: ProviderKind },

    /// Selection produced a provider with no backend in the registry.
    #[error("no provider registered for `{provider}`")]
    ProviderNotRegistered { provider: ProviderKind },

    /// Outbound endpoint rejected by security policy.
    #[error("security error: {0}")]
    Security(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RouterError {
    /// Shorthand for a [`RouterError::Provider`] without an underlying source.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }
}
