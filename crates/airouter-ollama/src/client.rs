// SPDX-FileCopyrightText: 2026 airouter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Ollama native API.
//!
//! Provides [`OllamaClient`] which builds generate requests from the
//! configured model and sampling options, and lists locally pulled models.
//! There is no retry: a failed call is reported once and the router falls
//! back.

use std::time::Duration;

use airouter_config::model::OllamaConfig;
use airouter_core::RouterError;
use tracing::debug;
use url::Url;

use crate::types::{
    ApiErrorResponse, GenerateOptions, GenerateRequest, GenerateResponse, TagsResponse,
};

/// HTTP client for a single Ollama endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: Url,
    model: String,
    options: GenerateOptions,
}

impl OllamaClient {
    /// Creates a client for the configured endpoint.
    ///
    /// Fails if the base URL is rejected by the endpoint policy or the HTTP
    /// client cannot be built.
    pub fn new(config: &OllamaConfig) -> Result<Self, RouterError> {
        if config.request_timeout_secs == 0 {
            return Err(RouterError::Config(
                "ollama.request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        let base_url = airouter_security::validate_endpoint(&config.base_url)?;
        let client =
            airouter_security::build_client(Duration::from_secs(config.request_timeout_secs))?;

        Ok(Self {
            client,
            base_url,
            model: config.model.clone(),
            options: GenerateOptions {
                temperature: config.temperature,
                top_p: config.top_p,
                max_tokens: config.max_tokens,
            },
        })
    }

    /// Configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Endpoint base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url())
    }

    /// Runs a single non-streaming completion.
    pub async fn generate(&self, prompt: &str) -> Result<GenerateResponse, RouterError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            options: self.options.clone(),
        };

        let response = self
            .client
            .post(self.endpoint("api/generate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| RouterError::Provider {
                message: format!("HTTP request to Ollama failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generate response received");

        let body = response.text().await.map_err(|e| RouterError::Provider {
            message: format!("failed to read Ollama response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!("Ollama error ({status}): {}", api_err.error),
                Err(_) => format!("Ollama returned {status}: {body}"),
            };
            return Err(RouterError::provider(message));
        }

        serde_json::from_str(&body).map_err(|e| RouterError::Provider {
            message: format!("failed to parse Ollama response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Names of the models pulled on this endpoint.
    pub async fn list_models(&self) -> Result<Vec<String>, RouterError> {
        let response = self
            .client
            .get(self.endpoint("api/tags"))
            .send()
            .await
            .map_err(|e| RouterError::Provider {
                message: format!("HTTP request to Ollama failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouterError::provider(format!(
                "Ollama returned {status} for model listing"
            )));
        }

        let tags: TagsResponse = response.json().await.map_err(|e| RouterError::Provider {
            message: format!("failed to parse Ollama model list: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    /// True if `available` contains the configured model.
    ///
    /// A model configured without a tag matches its `:latest` entry.
    pub fn has_model(&self, available: &[String]) -> bool {
        let wanted = normalize_model(&self.model);
        available.iter().any(|name| normalize_model(name) == wanted)
    }
}

fn normalize_model(name: &str) -> String {
    if name.contains(':') {
        name.to_string()
    } else {
        format!("{name}:latest")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OllamaClient {
        OllamaClient::new(&OllamaConfig {
            base_url: base_url.to_string(),
            ..OllamaConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn generate_sends_model_prompt_and_options() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama3.2:3b",
                "prompt": "hello",
                "stream": false,
                "options": {"temperature": 0.2, "top_p": 0.9, "max_tokens": 1024}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "llama3.2:3b",
                "response": "{\"ok\": true}",
                "done": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let resp = client.generate("hello").await.unwrap();
        assert_eq!(resp.response, "{\"ok\": true}");
        assert!(resp.done);
    }

    #[tokio::test]
    async fn generate_reports_api_error_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"error": "model 'llama3.2:3b' not found"})),
            )
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).generate("hi").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("404"), "got: {msg}");
        assert!(msg.contains("not found"), "got: {msg}");
    }

    #[tokio::test]
    async fn generate_rejects_unparseable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).generate("hi").await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[tokio::test]
    async fn list_models_returns_names() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": [{"name": "llama3.2:3b"}, {"name": "mistral:latest"}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let models = client.list_models().await.unwrap();
        assert_eq!(models, vec!["llama3.2:3b", "mistral:latest"]);
        assert!(client.has_model(&models));
    }

    #[test]
    fn untagged_model_matches_latest() {
        let client = OllamaClient::new(&OllamaConfig {
            model: "mistral".into(),
            ..OllamaConfig::default()
        })
        .unwrap();
        assert!(client.has_model(&["mistral:latest".to_string()]));
        assert!(!client.has_model(&["mistral:7b".to_string()]));
    }

    #[test]
    fn trailing_slash_in_base_url_is_ignored() {
        let client = test_client("http://localhost:11434/");
        assert_eq!(client.endpoint("api/tags"), "http://localhost:11434/api/tags");
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let result = OllamaClient::new(&OllamaConfig {
            request_timeout_secs: 0,
            ..OllamaConfig::default()
        });
        assert!(matches!(result, Err(RouterError::Config(_))));
    }

    #[test]
    fn public_plain_http_endpoint_is_refused() {
        let result = OllamaClient::new(&OllamaConfig {
            base_url: "http://ollama.example.com".into(),
            ..OllamaConfig::default()
        });
        assert!(matches!(result, Err(RouterError::Security(_))));
    }
}
