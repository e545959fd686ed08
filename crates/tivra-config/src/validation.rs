// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, URL shape, and threshold range.

use crate::diagnostic::ConfigError;
use crate::model::TivraConfig;

/// Log levels accepted by `agent.log_level`.
const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TivraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !KNOWN_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                KNOWN_LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    // Validate host is not empty and looks like a valid IP or hostname
    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.gateway.port == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.port must be non-zero".to_string(),
        });
    }

    if !config.ollama.base_url.starts_with("http://") && !config.ollama.base_url.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "ollama.base_url must start with http:// or https://, got `{}`",
                config.ollama.base_url
            ),
        });
    }

    if config.ollama.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "ollama.model must not be empty".to_string(),
        });
    }

    if config.ollama.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "ollama.timeout_secs must be at least 1".to_string(),
        });
    }

    let threshold = config.triage.similarity_threshold;
    if !(0.0..1.0).contains(&threshold) {
        errors.push(ConfigError::Validation {
            message: format!(
                "triage.similarity_threshold must be in [0.0, 1.0), got {threshold}"
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
