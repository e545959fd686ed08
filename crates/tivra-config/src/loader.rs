// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tivra.toml` > `~/.config/tivra/tivra.toml` >
//! `/etc/tivra/tivra.toml` with environment variable overrides via the
//! `TIVRA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TivraConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tivra/tivra.toml` (system-wide)
/// 3. `~/.config/tivra/tivra.toml` (user XDG config)
/// 4. `./tivra.toml` (local directory)
/// 5. `TIVRA_*` environment variables
pub fn load_config() -> Result<TivraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TivraConfig::default()))
        .merge(Toml::file("/etc/tivra/tivra.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("tivra/tivra.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("tivra.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TivraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TivraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TivraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TivraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TIVRA_OLLAMA_BASE_URL` must map to
/// `ollama.base_url`, not `ollama.base.url`.
fn env_provider() -> Env {
    Env::prefixed("TIVRA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: TIVRA_OLLAMA_BASE_URL -> "ollama_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("ollama_", "ollama.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("triage_", "triage.", 1);
        mapped.into()
    })
}
