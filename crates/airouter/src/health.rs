// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `airouter health` command implementation.
//!
//! Probes every registered provider and prints one line per backend.

use std::time::{Duration, Instant};

use airouter_core::{HealthStatus, Provider};
use airouter_router::ProviderRegistry;

/// Status of a provider check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of probing one provider.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

/// Probe every provider in `registry`. Returns the number of failed checks.
pub async fn run_health(registry: &ProviderRegistry) -> usize {
    let mut results = Vec::new();
    for provider in registry.providers() {
        results.push(check_provider(provider.as_ref()).await);
    }

    println!();
    println!("  airouter health");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", format_line(result));
    }
    println!();

    let failures = results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count();
    let warnings = results
        .iter()
        .filter(|r| r.status == CheckStatus::Warn)
        .count();
    if failures + warnings == 0 {
        println!("  All providers healthy.");
    } else {
        let issues = failures + warnings;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    }
    println!();

    failures
}

async fn check_provider(provider: &dyn Provider) -> CheckResult {
    let start = Instant::now();
    let (status, message) = match provider.health_check().await {
        Ok(HealthStatus::Healthy) => (CheckStatus::Pass, "healthy".to_string()),
        Ok(HealthStatus::Degraded(msg)) => (CheckStatus::Warn, msg),
        Ok(HealthStatus::Unhealthy(msg)) => (CheckStatus::Fail, msg),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name: provider.name(),
        status,
        message,
        duration: start.elapsed(),
    }
}

fn format_line(result: &CheckResult) -> String {
    let tag = match result.status {
        CheckStatus::Pass => "[OK]  ",
        CheckStatus::Warn => "[WARN]",
        CheckStatus::Fail => "[FAIL]",
    };
    format!(
        "    {tag} {:<12} {} ({}ms)",
        result.name,
        result.message,
        result.duration.as_millis()
    )
}
