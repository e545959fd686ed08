// SPDX-FileCopyrightText: 2026 Tivra Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, the CORS layer, and shared state for the handlers.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tivra_core::{TivraError, TriageModel};
use tivra_triage::UrgencyClassifier;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Upstream model backend.
    pub model: Arc<dyn TriageModel>,
    /// Reply classifier.
    pub classifier: Arc<UrgencyClassifier>,
}

/// Gateway server configuration (mirrors GatewayConfig from tivra-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
}

/// Build the gateway router with its routes and CORS layer.
pub fn build_router(state: GatewayState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/triage", post(handlers::post_triage))
        .route("/health", get(handlers::get_health))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS layer allowing the configured browser origins with credentials.
///
/// Origins that fail to parse as header values are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves:
/// - POST /triage
/// - GET /health
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), TivraError> {
    let app = build_router(state, &config.allowed_origins);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TivraError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| TivraError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    /// Backend returning a fixed raw reply, recording the last request.
    struct FixedReplyModel {
        reply: &'static str,
        last_request: Arc<Mutex<Option<(String, u32)>>>,
    }

    impl FixedReplyModel {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                last_request: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl TriageModel for FixedReplyModel {
        async fn assess(&self, symptoms: &str, patient_age: u32) -> Result<String, TivraError> {
            *self.last_request.lock().unwrap() = Some((symptoms.to_string(), patient_age));
            Ok(self.reply.to_string())
        }
    }

    /// Backend that always fails, standing in for an unreachable Ollama.
    struct FailingModel;

    #[async_trait]
    impl TriageModel for FailingModel {
        async fn assess(&self, _symptoms: &str, _patient_age: u32) -> Result<String, TivraError> {
            Err(TivraError::Model {
                message: "connection refused".into(),
                source: None,
            })
        }
    }

    fn router_with(model: Arc<dyn TriageModel>) -> Router {
        let state = GatewayState {
            model,
            classifier: Arc::new(UrgencyClassifier::new()),
        };
        build_router(state, &["http://localhost:5173".to_string()])
    }

    async fn post_triage_json(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/triage")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn triage_classifies_model_reply() {
        let model = Arc::new(FixedReplyModel::new(
            "<think>could be routine</think>\nUrgent",
        ));
        let router = router_with(model);

        let (status, body) = post_triage_json(router, r#"{"text": "chest pain"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["urgency"], "urgent");
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("immediate medical attention")
        );
    }

    #[tokio::test]
    async fn triage_forwards_text_and_default_age() {
        let model = Arc::new(FixedReplyModel::new("routine"));
        let last_request = model.last_request.clone();
        let router = router_with(model);

        let (_, body) = post_triage_json(router, r#"{"text": "mild rash"}"#).await;
        assert_eq!(body["urgency"], "routine");

        let recorded = last_request.lock().unwrap().clone().unwrap();
        assert_eq!(recorded.0, "mild rash");
        assert_eq!(recorded.1, 30);
    }

    #[tokio::test]
    async fn triage_forwards_explicit_age() {
        let model = Arc::new(FixedReplyModel::new("moderate"));
        let last_request = model.last_request.clone();
        let router = router_with(model);

        let (_, body) =
            post_triage_json(router, r#"{"text": "high fever", "patient_age": 72}"#).await;
        assert_eq!(body["urgency"], "moderate");
        assert_eq!(last_request.lock().unwrap().clone().unwrap().1, 72);
    }

    #[tokio::test]
    async fn triage_reports_unknown_for_unclassifiable_reply() {
        let model = Arc::new(FixedReplyModel::new("not sure, maybe serious?"));
        let router = router_with(model);

        let (status, body) = post_triage_json(router, r#"{"text": "odd feeling"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["urgency"], "unknown");
        assert!(body["message"].as_str().unwrap().contains("more details"));
    }

    #[tokio::test]
    async fn triage_maps_upstream_failure_to_error_label() {
        let router = router_with(Arc::new(FailingModel));

        let (status, body) = post_triage_json(router, r#"{"text": "chest pain"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["urgency"], "error");
        assert_eq!(
            body["message"],
            "Medical triage service is currently unavailable"
        );
    }

    #[tokio::test]
    async fn health_route_reports_ok() {
        let router = router_with(Arc::new(FixedReplyModel::new("routine")));

        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn cors_preflight_allows_configured_origin() {
        let router = router_with(Arc::new(FixedReplyModel::new("routine")));

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/triage")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("preflight should carry allow-origin");
        assert_eq!(allow_origin, "http://localhost:5173");
    }

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            allowed_origins: vec![],
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
    }
}
