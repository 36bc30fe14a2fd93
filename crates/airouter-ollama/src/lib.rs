// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama local-inference provider for the airouter task router.
//!
//! This crate implements [`Provider`] over Ollama's native
//! `/api/generate` endpoint. The model is asked for a JSON object and the
//! first object found in its reply becomes the task output. Local inference
//! is free, so the reported cost is always zero.

pub mod client;
pub mod extract;
pub mod types;

use std::time::Instant;

use airouter_config::model::OllamaConfig;
use airouter_core::{
    Capability, HealthStatus, Provider, ProviderKind, RouterError, Task, TaskResult,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::client::OllamaClient;
use crate::extract::extract_json_object;

const CAPABILITIES: &[Capability] = &[Capability::Text, Capability::Json];

/// Local inference provider backed by an Ollama server.
///
/// `generate` never returns `Err`: transport errors, bad statuses, and
/// replies without a JSON object all come back as `ok: false` results with
/// the elapsed latency filled in.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: OllamaClient,
}

impl OllamaProvider {
    /// Creates a provider for the configured endpoint and model.
    pub fn new(config: &OllamaConfig) -> Result<Self, RouterError> {
        let client = OllamaClient::new(config)?;
        info!(
            base_url = client.base_url(),
            model = client.model(),
            "Ollama provider initialized"
        );
        Ok(Self { client })
    }

    /// Configured model name.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    async fn run(&self, prompt: &str) -> Result<Value, RouterError> {
        let response = self.client.generate(prompt).await?;
        extract_json_object(&response.response)
            .ok_or_else(|| RouterError::provider("model reply did not contain a JSON object"))
    }
}

/// The prompt sent for `task`: its explicit prompt, or one built from the
/// tool name and input.
pub fn build_prompt(task: &Task) -> String {
    match &task.prompt {
        Some(prompt) => prompt.clone(),
        None => format!(
            "You are assisting a user-research team.\n\
             Task: {}\n\
             Input:\n{:#}\n\n\
             Respond with a single JSON object and nothing else.",
            task.tool,
            task.input_value()
        ),
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn capabilities(&self) -> &[Capability] {
        CAPABILITIES
    }

    fn estimate_cost(&self, _input: &Value) -> u64 {
        0
    }

    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError> {
        let started = Instant::now();
        let outcome = self.run(&build_prompt(task)).await;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(match outcome {
            Ok(output) => {
                debug!(tool = %task.tool, latency_ms, "Ollama generation succeeded");
                TaskResult::success(self.kind(), self.model(), latency_ms, 0, output)
            }
            Err(e) => {
                debug!(tool = %task.tool, latency_ms, error = %e, "Ollama generation failed");
                TaskResult::failure(self.kind(), self.model(), latency_ms, e.to_string())
            }
        })
    }

    async fn health_check(&self) -> Result<HealthStatus, RouterError> {
        match self.client.list_models().await {
            Ok(models) if self.client.has_model(&models) => Ok(HealthStatus::Healthy),
            Ok(_) => Ok(HealthStatus::Degraded(format!(
                "model `{}` is not pulled on {}",
                self.model(),
                self.client.base_url()
            ))),
            Err(e) => Ok(HealthStatus::Unhealthy(e.to_string())),
        }
    }
}
