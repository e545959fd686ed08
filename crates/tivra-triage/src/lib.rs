// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reply interpretation for the Tivra triage service.
//!
//! This crate provides:
//! - [`strip_markup`] / [`strip_thinking`] / [`strip_tags`]: markup removal
//! - [`normalize`]: canonical comparison form
//! - [`UrgencyClassifier`]: the ordered matching cascade
//! - [`explanation_for`]: static label-to-sentence lookup
//!
//! The classifier turns an unstructured model reply -- which may contain
//! meta-commentary, `<think>` blocks, or near-miss wording -- into one of a
//! closed set of urgency labels, deterministically. Every function here is
//! total over arbitrary string input and never panics.

pub mod classifier;
pub mod explain;
pub mod markup;
pub mod normalize;

pub use classifier::{ClassificationResult, UrgencyClassifier};
pub use explain::explanation_for;
pub use markup::{strip_markup, strip_tags, strip_thinking};
pub use normalize::normalize;
