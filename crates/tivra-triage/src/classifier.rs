// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Urgency extraction from raw model replies.
//!
//! Applies an ordered cascade of matching strategies to a free-form reply:
//! phrase search, exact normalized match, token intersection, then fuzzy
//! similarity. A later stage runs only when every earlier stage found
//! nothing. At every stage, categories are tried most severe first, so
//! replies naming several categories resolve deterministically.

use tivra_core::Urgency;

use crate::markup::strip_markup;
use crate::normalize::normalize;

/// Similarity ratio the fuzzy fallback must strictly exceed to accept a
/// category. Below this, near-miss wording is reported as no match rather
/// than guessed.
const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Result of classifying a raw model reply.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// The resolved category, or `None` when no stage found a confident match.
    pub urgency: Option<Urgency>,
    /// Human-readable reason for the classification.
    pub reason: &'static str,
}

/// Deterministic classifier over free-form model replies.
///
/// Total over any input: empty strings, pure markup, and pure punctuation
/// all classify to `None` without panicking.
pub struct UrgencyClassifier {
    similarity_threshold: f64,
}

impl UrgencyClassifier {
    /// Create a new classifier with the default similarity threshold.
    pub fn new() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    /// Create a new classifier with a custom similarity threshold.
    pub fn with_threshold(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }

    /// Classify a raw model reply into an urgency category.
    ///
    /// Markup is stripped first, then the cascade runs: word-boundary phrase
    /// search on the stripped text, exact match on the normalized text,
    /// token-set membership, and finally fuzzy similarity against each
    /// category name.
    pub fn classify(&self, raw_reply: &str) -> ClassificationResult {
        let stripped = strip_markup(raw_reply);
        let lowered = stripped.to_lowercase();

        // Stage 1: category name as a whole word anywhere in the reply.
        for category in Urgency::SEVERITY_ORDER {
            if contains_word(&lowered, category.name()) {
                return ClassificationResult {
                    urgency: Some(category),
                    reason: "category name appears in reply",
                };
            }
        }

        // Stage 2: the whole normalized reply is exactly one category name.
        let normalized = normalize(&stripped);
        for category in Urgency::SEVERITY_ORDER {
            if normalized == category.name() {
                return ClassificationResult {
                    urgency: Some(category),
                    reason: "normalized reply equals category name",
                };
            }
        }

        // Stage 3: category name among the normalized tokens.
        for category in Urgency::SEVERITY_ORDER {
            if normalized.split_whitespace().any(|t| t == category.name()) {
                return ClassificationResult {
                    urgency: Some(category),
                    reason: "category name appears as a token",
                };
            }
        }

        // Stage 4: closest category by normalized edit-distance similarity.
        let mut best: Option<(Urgency, f64)> = None;
        for category in Urgency::SEVERITY_ORDER {
            let score = strsim::normalized_levenshtein(&normalized, category.name());
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((category, score));
            }
        }
        if let Some((category, score)) = best
            && score > self.similarity_threshold
        {
            return ClassificationResult {
                urgency: Some(category),
                reason: "fuzzy similarity above threshold",
            };
        }

        ClassificationResult {
            urgency: None,
            reason: "no confident match",
        }
    }
}

impl Default for UrgencyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-sensitive word-boundary search: `needle` must not be flanked by
/// alphanumeric characters. Callers pass a lowercased haystack.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let mut search_from = 0;
    while let Some(pos) = haystack[search_from..].find(needle) {
        let start = search_from + pos;
        let end = start + needle.len();
        let bounded_before = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_after = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if bounded_before && bounded_after {
            return true;
        }
        search_from = start + 1;
    }
    false
}
