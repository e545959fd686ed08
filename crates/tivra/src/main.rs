// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tivra - a symptom-urgency triage service.
//!
//! This is the binary entry point for the Tivra gateway.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;

use clap::{Parser, Subcommand};
use tivra_core::TriageLabel;
use tivra_triage::{UrgencyClassifier, explanation_for};

/// Tivra - a symptom-urgency triage service.
#[derive(Parser, Debug)]
#[command(name = "tivra", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the triage HTTP gateway.
    Serve,
    /// Classify a raw model reply offline and print label + explanation.
    Classify {
        /// Raw reply text to run through the cascade.
        reply: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match tivra_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            tivra_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Classify { reply }) => {
            let classifier =
                UrgencyClassifier::with_threshold(config.triage.similarity_threshold);
            let label = TriageLabel::from(classifier.classify(&reply).urgency);
            println!("{label}: {}", explanation_for(label.as_str()));
        }
        None => {
            println!("tivra: use --help for available commands");
        }
    }
}
