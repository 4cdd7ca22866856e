use std::time::Duration;

use axum::{middleware::from_fn, Router};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

use super::request_id::{self, MakeReqId};

/// Knobs of the standard middleware stack.
#[derive(Debug, Clone)]
pub struct HttpStackConfig {
    /// Per-request timeout; `None` disables it.
    pub timeout: Option<Duration>,
    /// Permissive CORS (any origin, method and header).
    pub cors_enabled: bool,
    pub body_limit_bytes: usize,
}

impl Default for HttpStackConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            cors_enabled: true,
            body_limit_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Wrap `router` with the standard stack.
///
/// Order, outermost to innermost:
/// SetRequestId -> PropagateRequestId -> Trace -> push_req_id_to_extensions -> Timeout -> CORS -> BodyLimit
pub fn with_standard_layers(router: Router, cfg: &HttpStackConfig) -> Router {
    let x_request_id = request_id::header();

    // `Router::layer` wraps what is already there, so layers go innermost first.
    let mut router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));

    if cfg.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    if let Some(timeout) = cfg.timeout.filter(|t| !t.is_zero()) {
        router = router.layer(TimeoutLayer::new(timeout));
    }

    router
        .layer(from_fn(request_id::push_req_id_to_extensions))
        .layer(request_id::create_trace_layer())
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}
