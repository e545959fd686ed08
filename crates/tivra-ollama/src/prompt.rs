// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed triage prompt template.

/// Instruction template sent to the model. `{symptoms}` and `{age}` are the
/// only variable slots; everything else is fixed.
const TRIAGE_PROMPT: &str = "\
[INST] You are a medical triage assistant. Classify the urgency of the patient's symptoms into one of these categories:
- urgent: Requires immediate medical attention (e.g., chest pain, difficulty breathing)
- moderate: Should see a doctor within 24 hours (e.g., high fever, severe pain)
- routine: Can wait for a regular appointment (e.g., cold symptoms, minor rash)

Patient description: {symptoms}
Patient age: {age}

Only respond with the single urgency classification word. Do not include any other text.
[/INST]
";

/// Fills the triage template with a symptom description and patient age.
pub fn build_prompt(symptoms: &str, patient_age: u32) -> String {
    TRIAGE_PROMPT
        .replace("{symptoms}", symptoms)
        .replace("{age}", &patient_age.to_string())
}
