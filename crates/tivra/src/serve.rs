// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tivra serve` command implementation.
//!
//! Starts the triage gateway with the configured Ollama backend and
//! classification threshold.

use std::sync::Arc;
use std::time::Duration;

use tivra_config::TivraConfig;
use tivra_core::TivraError;
use tivra_gateway::{GatewayState, ServerConfig};
use tivra_ollama::OllamaClient;
use tivra_triage::UrgencyClassifier;
use tracing::{error, info};

/// Runs the `tivra serve` command.
///
/// Builds the Ollama client and classifier from configuration and serves the
/// gateway until the process is stopped.
pub async fn run_serve(config: TivraConfig) -> Result<(), TivraError> {
    // Initialize tracing subscriber.
    init_tracing(&config.agent.log_level);

    info!("starting tivra serve");

    let client = OllamaClient::new(
        config.ollama.base_url.clone(),
        config.ollama.model.clone(),
        Duration::from_secs(config.ollama.timeout_secs),
    )
    .map_err(|e| {
        error!(error = %e, "failed to initialize Ollama client");
        eprintln!(
            "error: could not construct the Ollama HTTP client. Check the [ollama] section of tivra.toml."
        );
        e
    })?;

    info!(
        base_url = config.ollama.base_url.as_str(),
        model = config.ollama.model.as_str(),
        timeout_secs = config.ollama.timeout_secs,
        "ollama backend configured"
    );

    let classifier = UrgencyClassifier::with_threshold(config.triage.similarity_threshold);
    info!(
        similarity_threshold = config.triage.similarity_threshold,
        "classifier initialized"
    );

    let state = GatewayState {
        model: Arc::new(client),
        classifier: Arc::new(classifier),
    };

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
        allowed_origins: config.gateway.allowed_origins.clone(),
    };

    tivra_gateway::start_server(&server_config, state).await?;

    info!("tivra serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tivra={log_level},tivra_gateway={log_level},tivra_ollama={log_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
