// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! airouter - AI-provider router for user-research tasks.
//!
//! This is the binary entry point. Results and reports go to stdout as JSON
//! or plain text; logs go to stderr.

mod health;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use airouter_config::RouterConfig;
use airouter_core::{Policy, RouterError, Task};
use airouter_router::{TaskRunner, select, validate_policy};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::error;

/// airouter - route research tasks to mock, local, or paid AI providers.
#[derive(Parser, Debug)]
#[command(name = "airouter", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a task and print its result as JSON.
    Run {
        /// Task JSON file, or `-` for stdin.
        task: String,
    },
    /// Show which provider a policy selects.
    Select {
        /// Policy JSON file, or `-` for stdin.
        policy: String,
    },
    /// Check a policy for negative budget or latency values.
    Validate {
        /// Policy JSON file, or `-` for stdin.
        policy: String,
    },
    /// Redact PII from text.
    Sanitize {
        /// Text to sanitize, or `-` for stdin.
        text: String,
        /// Only report whether the text contains PII.
        #[arg(long, conflicts_with = "preview")]
        check: bool,
        /// Truncate the sanitized text to N characters.
        #[arg(long, value_name = "N")]
        preview: Option<usize>,
    },
    /// Probe every registered provider.
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => airouter_config::load_and_validate_path(path),
        None => airouter_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            airouter_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match dispatch(cli.command, config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(command: Commands, config: RouterConfig) -> Result<ExitCode, RouterError> {
    match command {
        Commands::Run { task } => {
            let task: Task = input::read_json(&task)?;
            let runner = TaskRunner::new(config);
            let result = runner.run_task(&task).await;
            print_json(&result)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Select { policy } => {
            let policy: Policy = input::read_json(&policy)?;
            let selection = select(&policy, &config.execution);
            print_json(&json!({
                "provider": selection.provider,
                "reason": selection.reason,
                "executionEnabled": config.execution.enabled,
                "valid": validate_policy(&policy),
            }))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { policy } => {
            let policy: Policy = input::read_json(&policy)?;
            let violations = policy.violations();
            print_json(&json!({
                "valid": violations.is_empty(),
                "violations": violations,
            }))?;
            Ok(if violations.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Sanitize {
            text,
            check,
            preview,
        } => {
            let text = if text == "-" {
                input::read_source(&text)?
            } else {
                text
            };
            if check {
                println!("{}", airouter_security::contains_pii(&text));
            } else if let Some(max_len) = preview {
                println!("{}", airouter_security::preview(&text, max_len));
            } else {
                println!("{}", airouter_security::sanitize(&text));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let runner = TaskRunner::new(config);
            let failures = health::run_health(runner.registry()).await;
            Ok(if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), RouterError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| RouterError::Internal(format!("failed to serialize output: {e}")))?;
    println!("{text}");
    Ok(())
}

/// Initialize tracing with an EnvFilter. `RUST_LOG` wins over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("airouter={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_from_stdin() {
        let cli = Cli::try_parse_from(["airouter", "run", "-"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { task } if task == "-"));
    }

    #[test]
    fn parses_sanitize_preview() {
        let cli = Cli::try_parse_from(["airouter", "sanitize", "hola", "--preview", "10"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sanitize { preview: Some(10), check: false, .. }
        ));
    }

    #[test]
    fn check_and_preview_conflict() {
        let parsed =
            Cli::try_parse_from(["airouter", "sanitize", "x", "--check", "--preview", "5"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli =
            Cli::try_parse_from(["airouter", "health", "--config", "/tmp/airouter.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/airouter.toml")));
    }
}
