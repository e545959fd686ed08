// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Tivra triage service.
//!
//! This crate provides the shared error type, the urgency category and wire
//! label types, and the [`TriageModel`] trait implemented by upstream model
//! adapters.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TivraError;
pub use traits::TriageModel;
pub use types::{TriageLabel, Urgency};
