// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Ollama generate API.
//!
//! Provides [`OllamaClient`] which handles request construction, transient
//! error retry, and error-body decoding, and implements [`TriageModel`] by
//! filling the fixed triage prompt.

use std::time::Duration;

use async_trait::async_trait;
use tivra_core::{TivraError, TriageModel};
use tracing::{debug, warn};

use crate::prompt::build_prompt;
use crate::types::{ApiErrorResponse, GenerateRequest, GenerateResponse};

/// Path of the generate endpoint under the configured base URL.
const GENERATE_PATH: &str = "/api/generate";

/// HTTP client for Ollama communication.
///
/// Manages connection pooling, the request timeout, and retry logic for
/// transient errors (429, 500, 503).
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl OllamaClient {
    /// Creates a new Ollama client.
    ///
    /// # Arguments
    /// * `base_url` - Server base URL (e.g., "http://localhost:11434")
    /// * `model` - Model identifier to request completions from
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: String, model: String, timeout: Duration) -> Result<Self, TivraError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TivraError::Model {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_retries: 1,
        })
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a non-streaming generate request and returns the reply text.
    ///
    /// On transient errors (429, 500, 503), retries once after a 1-second delay.
    pub async fn generate(&self, prompt: &str) -> Result<String, TivraError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };
        let url = format!("{}{GENERATE_PATH}", self.base_url);

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying generate request after transient error");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }

            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| TivraError::Model {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "generate response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| TivraError::Model {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let generate: GenerateResponse =
                    serde_json::from_str(&body).map_err(|e| TivraError::Model {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(generate.response);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(TivraError::Model {
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("Ollama API error: {}", api_err.error)
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(TivraError::Model {
                message: error_msg,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| TivraError::Model {
            message: "generate request failed after retries".into(),
            source: None,
        }))
    }
}

#[async_trait]
impl TriageModel for OllamaClient {
    async fn assess(&self, symptoms: &str, patient_age: u32) -> Result<String, TivraError> {
        self.generate(&build_prompt(symptoms, patient_age)).await
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> OllamaClient {
        OllamaClient::new(
            base_url.to_string(),
            "deepseek-r1:1.5b".into(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn generate_returns_reply_text() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "model": "deepseek-r1:1.5b",
            "response": "Urgent",
            "done": true
        });

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.generate("some prompt").await.unwrap();
        assert_eq!(reply, "Urgent");
    }

    #[tokio::test]
    async fn generate_retries_on_429() {
        let server = MockServer::start().await;

        let success_body = serde_json::json!({
            "response": "moderate",
            "done": true
        });

        // First request returns 429, second returns 200.
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&success_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.generate("prompt").await.unwrap();
        assert_eq!(reply, "moderate");
    }

    #[tokio::test]
    async fn generate_fails_on_404_with_decoded_error() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({"error": "model 'missing' not found"});

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(404).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate("prompt").await.unwrap_err().to_string();
        assert!(err.contains("not found"), "got: {err}");
    }

    #[tokio::test]
    async fn generate_exhausts_retries_on_503() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.generate("prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn generate_rejects_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate("prompt").await.unwrap_err().to_string();
        assert!(err.contains("parse"), "got: {err}");
    }

    #[tokio::test]
    async fn assess_fills_the_prompt_template() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({"response": "routine", "done": true});

        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_string_contains("Patient description: runny nose"))
            .and(body_string_contains("Patient age: 42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let reply = client.assess("runny nose", 42).await.unwrap();
        assert_eq!(reply, "routine");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new(
            "http://localhost:11434/".into(),
            "m".into(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
