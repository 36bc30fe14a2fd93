// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait shared by the mock, local-inference, and paid backends.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RouterError;
use crate::types::{Capability, HealthStatus, ProviderKind, Task, TaskResult};

/// An interchangeable backend capable of fulfilling a [`Task`].
///
/// Implementations are held as `Arc<dyn Provider>` in the registry, so the
/// trait uses `#[async_trait]` for dynamic dispatch compatibility.
#[async_trait]
pub trait Provider: Send + Sync + 'static {
    /// Registry key for this backend.
    fn kind(&self) -> ProviderKind;

    /// Stable provider name, as reported in [`TaskResult::provider`].
    fn name(&self) -> String {
        self.kind().to_string()
    }

    /// Content modalities this backend supports.
    fn capabilities(&self) -> &[Capability];

    /// Whether this backend supports the given modality.
    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Estimated cost in cents of servicing the given input.
    fn estimate_cost(&self, input: &Value) -> u64;

    /// Generates a result for the task.
    ///
    /// Backends that can describe their own failure return `Ok` with
    /// `ok: false`; `Err` is reserved for failures the caller must absorb.
    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError>;

    /// Liveness probe. Backends without a remote dependency are always healthy.
    async fn health_check(&self) -> Result<HealthStatus, RouterError> {
        Ok(HealthStatus::Healthy)
    }
}
