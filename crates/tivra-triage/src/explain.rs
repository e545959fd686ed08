// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static mapping from triage labels to user-facing explanations.

/// Fallback sentence, shared by the `unknown` label and any unrecognized key.
const UNKNOWN_EXPLANATION: &str =
    "Unable to determine urgency. Please provide more details about your symptoms.";

/// Returns the fixed explanation sentence for a triage label.
///
/// Keys outside the five recognized labels fall back to the `unknown`
/// sentence; this lookup never fails.
pub fn explanation_for(label: &str) -> &'static str {
    match label {
        "urgent" => {
            "Seek immediate medical attention. These symptoms may indicate a serious condition."
        }
        "moderate" => {
            "Schedule a doctor visit within 24 hours. These symptoms require professional evaluation."
        }
        "routine" => {
            "Schedule a routine appointment. These symptoms can be monitored but don't require urgent care."
        }
        "error" => "Medical triage service is currently unavailable",
        _ => UNKNOWN_EXPLANATION,
    }
}
