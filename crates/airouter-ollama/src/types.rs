// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama HTTP API request and response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// Always false; the router reads the whole response at once.
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Sampling options sent with every generate request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

/// Non-streaming response of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    /// Generated text.
    pub response: String,
    #[serde(default)]
    pub done: bool,
    /// Total server-side time in nanoseconds.
    #[serde(default)]
    pub total_duration: Option<u64>,
    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// Response of `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One locally pulled model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Error body Ollama returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
