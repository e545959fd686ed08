// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama provider for the Tivra triage service.
//!
//! This crate provides:
//! - [`OllamaClient`]: HTTP client for the generate API with transient retry
//! - [`build_prompt`]: the fixed triage prompt template
//!
//! The client implements [`tivra_core::TriageModel`], the seam the gateway
//! calls through.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::OllamaClient;
pub use prompt::build_prompt;
pub use types::{GenerateRequest, GenerateResponse};
