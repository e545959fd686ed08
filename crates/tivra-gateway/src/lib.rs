// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Tivra triage service.
//!
//! Exposes `POST /triage` and `GET /health` over axum. The gateway is thin
//! plumbing: it fills the request into the model seam, hands the raw reply
//! to the classifier, and maps the outcome to a label plus its canned
//! explanation. Upstream failures become the `error` label, never a 5xx.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
