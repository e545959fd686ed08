// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text canonicalization for robust comparison.

/// Produces the canonical comparison form of `text`: lowercase, letters,
/// digits and spaces only, single-spaced, trimmed.
///
/// Total and idempotent: normalizing twice yields the same result as once.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
