// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait for the upstream generative model.

use async_trait::async_trait;

use crate::error::TivraError;

/// Seam to the generative model that produces raw triage replies.
///
/// Implementations own prompt construction and transport. Callers receive
/// the model's reply as a single text blob with no guaranteed format --
/// interpreting it is the classifier's job.
#[async_trait]
pub trait TriageModel: Send + Sync {
    /// Requests an urgency assessment for the given symptom description and
    /// patient age, returning the model's raw reply text.
    async fn assess(&self, symptoms: &str, patient_age: u32) -> Result<String, TivraError>;
}
