// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Urgency categories and wire-facing triage labels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Urgency category assigned to a symptom description.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Requires immediate medical attention.
    Urgent,
    /// Should see a doctor within 24 hours.
    Moderate,
    /// Can wait for a regular appointment.
    Routine,
}

impl Urgency {
    /// All categories, most severe first.
    ///
    /// Every classification stage iterates this order, so replies in which
    /// several category names co-occur resolve deterministically.
    pub const SEVERITY_ORDER: [Urgency; 3] =
        [Urgency::Urgent, Urgency::Moderate, Urgency::Routine];

    /// Lowercase category name as it appears in model replies.
    pub const fn name(self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Moderate => "moderate",
            Urgency::Routine => "routine",
        }
    }
}

/// Outcome label surfaced to callers of the triage endpoint.
///
/// `Unknown` means the classification cascade found no confident match.
/// `Error` means the upstream model call itself failed; it is produced by
/// the gateway layer only, never by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriageLabel {
    /// One of the three real urgency categories.
    Category(Urgency),
    /// No stage of the cascade yielded a confident match.
    Unknown,
    /// The upstream model call failed.
    Error,
}

impl TriageLabel {
    /// The wire label string.
    pub const fn as_str(self) -> &'static str {
        match self {
            TriageLabel::Category(urgency) => urgency.name(),
            TriageLabel::Unknown => "unknown",
            TriageLabel::Error => "error",
        }
    }
}

impl From<Option<Urgency>> for TriageLabel {
    fn from(urgency: Option<Urgency>) -> Self {
        match urgency {
            Some(u) => TriageLabel::Category(u),
            None => TriageLabel::Unknown,
        }
    }
}

impl std::fmt::Display for TriageLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TriageLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
