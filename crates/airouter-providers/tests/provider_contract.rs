// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contract tests for the built-in backends behind `Arc<dyn Provider>`.

use std::sync::Arc;

use airouter_core::{Policy, Provider, ProviderKind, Task, TaskContext};
use airouter_providers::{AnthropicProvider, GeminiProvider, MockProvider, OpenAiProvider};
use serde_json::json;

fn builtins() -> Vec<Arc<dyn Provider>> {
    vec![
        Arc::new(MockProvider::instant()),
        Arc::new(OpenAiProvider),
        Arc::new(AnthropicProvider),
        Arc::new(GeminiProvider),
    ]
}

fn research_task() -> Task {
    Task::new("summarize_session", TaskContext::new("tenant-42"))
        .with_input("notes", "participant struggled with onboarding")
        .with_policy(Policy::paid(None))
}

#[test]
fn names_are_unique_and_lowercase() {
    let names: Vec<String> = builtins().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["mock", "openai", "anthropic", "gemini"]);
}

#[test]
fn only_paid_backends_charge() {
    let input = json!({"notes": "x".repeat(2500)});
    for provider in builtins() {
        let cost = provider.estimate_cost(&input);
        if provider.kind().is_paid() {
            assert!(cost > 0, "{} should charge", provider.name());
        } else {
            assert_eq!(cost, 0);
        }
    }
}

#[tokio::test]
async fn only_mock_generates() {
    let task = research_task();
    for provider in builtins() {
        let outcome = provider.generate(&task).await;
        match provider.kind() {
            ProviderKind::Mock => {
                let result = outcome.expect("mock never fails");
                assert!(result.ok);
                assert_eq!(result.provider, ProviderKind::Mock);
            }
            _ => assert!(outcome.is_err()),
        }
    }
}
