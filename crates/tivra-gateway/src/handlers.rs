// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the triage REST API.
//!
//! Handles POST /triage and GET /health.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use tivra_core::TriageLabel;
use tivra_triage::explanation_for;

use crate::server::GatewayState;

/// Request body for POST /triage.
#[derive(Debug, Deserialize)]
pub struct TriageRequest {
    /// Free-text symptom description.
    pub text: String,
    /// Patient age in years.
    #[serde(default = "default_patient_age")]
    pub patient_age: u32,
}

fn default_patient_age() -> u32 {
    30
}

/// Response body for POST /triage.
#[derive(Debug, Serialize)]
pub struct TriageResponse {
    /// Resolved urgency label.
    pub urgency: TriageLabel,
    /// Fixed human-readable explanation for the label.
    pub message: &'static str,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
}

/// POST /triage
///
/// Queries the model backend with the symptom description and age, runs the
/// classification cascade over the raw reply, and returns the label with its
/// canned explanation. An upstream failure surfaces as the `error` label in
/// a 200 response rather than an HTTP error.
pub async fn post_triage(
    State(state): State<GatewayState>,
    Json(body): Json<TriageRequest>,
) -> Json<TriageResponse> {
    let request_id = uuid::Uuid::new_v4();

    match state.model.assess(&body.text, body.patient_age).await {
        Ok(raw_reply) => {
            let result = state.classifier.classify(&raw_reply);
            let label = TriageLabel::from(result.urgency);
            info!(
                %request_id,
                label = %label,
                reason = result.reason,
                reply_len = raw_reply.len(),
                "reply classified"
            );
            Json(TriageResponse {
                urgency: label,
                message: explanation_for(label.as_str()),
            })
        }
        Err(e) => {
            error!(%request_id, error = %e, "model request failed");
            Json(TriageResponse {
                urgency: TriageLabel::Error,
                message: explanation_for(TriageLabel::Error.as_str()),
            })
        }
    }
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health(State(_state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
