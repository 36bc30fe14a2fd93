// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as the endpoint policy, sampling ranges, and latency bounds.

use crate::diagnostic::ConfigError;
use crate::model::RouterConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.execution.default_text_provider.trim().is_empty() {
        errors.push(validation("execution.default_text_provider must not be empty"));
    }

    if let Err(e) = airouter_security::validate_endpoint(&config.ollama.base_url) {
        errors.push(validation(format!("ollama.base_url rejected: {e}")));
    }

    if config.ollama.model.trim().is_empty() {
        errors.push(validation("ollama.model must not be empty"));
    }

    if !(0.0..=2.0).contains(&config.ollama.temperature) {
        errors.push(validation(format!(
            "ollama.temperature must be between 0.0 and 2.0, got {}",
            config.ollama.temperature
        )));
    }

    if !(0.0..=1.0).contains(&config.ollama.top_p) {
        errors.push(validation(format!(
            "ollama.top_p must be between 0.0 and 1.0, got {}",
            config.ollama.top_p
        )));
    }

    if config.ollama.max_tokens == 0 {
        errors.push(validation("ollama.max_tokens must be greater than 0"));
    }

    if config.ollama.request_timeout_secs == 0 {
        errors.push(validation("ollama.request_timeout_secs must be greater than 0"));
    }

    if config.mock.min_latency_ms > config.mock.max_latency_ms {
        errors.push(validation(format!(
            "mock.min_latency_ms ({}) must not exceed mock.max_latency_ms ({})",
            config.mock.min_latency_ms, config.mock.max_latency_ms
        )));
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_lowercase().as_str()) {
        errors.push(validation(format!(
            "logging.level must be one of {}, got `{}`",
            LOG_LEVELS.join(", "),
            config.logging.level
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        let config = RouterConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn malformed_base_url_fails_validation() {
        let mut config = RouterConfig::default();
        config.ollama.base_url = "not a url".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "ollama.base_url"));
    }

    #[test]
    fn non_http_scheme_fails_validation() {
        let mut config = RouterConfig::default();
        config.ollama.base_url = "ftp://localhost:11434".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "unsupported scheme"));
    }

    #[test]
    fn public_plain_http_endpoint_fails_validation() {
        let mut config = RouterConfig::default();
        config.ollama.base_url = "http://ollama.internal.example:11434".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "TLS required"));
    }

    #[test]
    fn lan_and_https_endpoints_pass_validation() {
        for base_url in ["http://192.168.1.20:11434", "https://ollama.example.com"] {
            let mut config = RouterConfig::default();
            config.ollama.base_url = base_url.to_string();
            assert!(validate_config(&config).is_ok(), "{base_url}");
        }
    }

    #[test]
    fn out_of_range_sampling_fails_validation() {
        let mut config = RouterConfig::default();
        config.ollama.temperature = 3.5;
        config.ollama.top_p = -0.1;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "temperature"));
        assert!(has_error(&errors, "top_p"));
    }

    #[test]
    fn inverted_mock_latency_range_fails_validation() {
        let mut config = RouterConfig::default();
        config.mock.min_latency_ms = 3000;
        config.mock.max_latency_ms = 100;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "mock.min_latency_ms"));
    }

    #[test]
    fn collects_all_errors_without_failing_fast() {
        let mut config = RouterConfig::default();
        config.execution.default_text_provider = "  ".to_string();
        config.ollama.model = String::new();
        config.ollama.max_tokens = 0;
        config.logging.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = RouterConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
