// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock provider with canned, tool-specific payloads.
//!
//! `MockProvider` performs no I/O and never fails. It reports a random
//! latency within the configured bounds and, when `simulate_latency` is on,
//! actually waits that long so callers see realistic timing.

use std::time::Duration;

use airouter_config::model::MockConfig;
use airouter_core::{Capability, ProviderKind, RouterError, Task, TaskResult};
use async_trait::async_trait;
use rand::Rng;
use serde_json::{Value, json};
use tracing::debug;

/// Model name reported on every mock result.
pub const MOCK_MODEL: &str = "mock-v1";

const CAPABILITIES: &[Capability] = &[Capability::Text, Capability::Json];

/// Deterministic-shape stand-in for a real model.
#[derive(Debug, Clone)]
pub struct MockProvider {
    config: MockConfig,
}

impl MockProvider {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Mock that reports a fixed latency and never sleeps. For tests.
    pub fn instant() -> Self {
        Self::new(MockConfig {
            simulate_latency: false,
            min_latency_ms: 0,
            max_latency_ms: 0,
        })
    }

    /// Produce a successful result for `task`. Infallible.
    pub async fn respond(&self, task: &Task) -> TaskResult {
        let latency_ms = self.pick_latency();
        if self.config.simulate_latency && latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(latency_ms)).await;
        }
        debug!(tool = %task.tool, latency_ms, "mock response");
        TaskResult::success(
            ProviderKind::Mock,
            MOCK_MODEL,
            latency_ms,
            0,
            canned_output(task),
        )
    }

    fn pick_latency(&self) -> u64 {
        let (lo, hi) = if self.config.min_latency_ms <= self.config.max_latency_ms {
            (self.config.min_latency_ms, self.config.max_latency_ms)
        } else {
            (self.config.max_latency_ms, self.config.min_latency_ms)
        };
        rand::thread_rng().gen_range(lo..=hi)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

#[async_trait]
impl airouter_core::Provider for MockProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Mock
    }

    fn capabilities(&self) -> &[Capability] {
        CAPABILITIES
    }

    fn estimate_cost(&self, _input: &Value) -> u64 {
        0
    }

    async fn generate(&self, task: &Task) -> Result<TaskResult, RouterError> {
        Ok(self.respond(task).await)
    }
}

/// Canned payload for the task's tool. Unknown tools get a generic payload.
fn canned_output(task: &Task) -> Value {
    let generated_at = chrono::Utc::now().to_rfc3339();
    let mut output = match task.tool.as_str() {
        "summarize_session" => json!({
            "summary": "The participant walked through the onboarding flow and \
                        described friction when connecting their account.",
            "keyPoints": [
                "Completed sign-up without assistance",
                "Hesitated at the account linking step",
                "Expected progress to be saved between visits"
            ],
            "painPoints": ["Account linking copy is unclear"],
            "sentiment": "neutral"
        }),
        "generate_interview_guide" => json!({
            "title": "Interview guide",
            "durationMinutes": 45,
            "sections": [
                {
                    "name": "Warm-up",
                    "questions": [
                        "Tell me about your role and a typical week.",
                        "Which tools do you rely on most?"
                    ]
                },
                {
                    "name": "Current workflow",
                    "questions": [
                        "Walk me through the last time you did this task.",
                        "What was the hardest part?"
                    ]
                },
                {
                    "name": "Wrap-up",
                    "questions": ["Is there anything we did not ask that we should have?"]
                }
            ]
        }),
        "analyze_participant" => json!({
            "profile": "Experienced user with a strong preference for keyboard workflows.",
            "behaviors": ["Skips tutorials", "Uses search over navigation"],
            "needs": ["Faster bulk editing", "Clear error recovery"],
            "confidence": 0.5
        }),
        "suggest_followups" => json!({
            "followups": [
                {
                    "title": "Validate account linking copy",
                    "rationale": "Several participants paused at this step.",
                    "priority": "high"
                },
                {
                    "title": "Test saved-progress prototype",
                    "rationale": "Participants expected drafts to persist.",
                    "priority": "medium"
                }
            ]
        }),
        other => json!({
            "message": format!("Mock response for `{other}`"),
            "inputKeys": task.input.keys().collect::<Vec<_>>()
        }),
    };

    if let Value::Object(map) = &mut output {
        map.insert("mock".to_string(), Value::Bool(true));
        map.insert("generatedAt".to_string(), Value::String(generated_at));
    }
    output
}
