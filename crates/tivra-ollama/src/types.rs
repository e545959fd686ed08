// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama generate-API request/response types.

use serde::{Deserialize, Serialize};

/// A request to the Ollama `/api/generate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g., "deepseek-r1:1.5b").
    pub model: String,
    /// The filled prompt to complete.
    pub prompt: String,
    /// Whether to stream the response. Always `false` here; the reply is
    /// consumed as a single blob.
    pub stream: bool,
}

/// A non-streaming response from `/api/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The model's reply text.
    pub response: String,
    /// Model that generated the reply.
    #[serde(default)]
    pub model: String,
    /// Whether generation finished.
    #[serde(default)]
    pub done: bool,
}

/// Error body returned by the Ollama API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
