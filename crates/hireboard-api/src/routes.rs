//! API route configuration.

use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::limit::RequestBodyLimitLayer;

use hireboard_gate::{authorize_request, JwtVerifier};

use crate::handlers::{admin, dashboard, health, jobs, recruiter};
use crate::metrics::metrics_middleware;
use crate::middleware::{cors_layer, request_id, request_logging, security_headers};
use crate::state::AppState;

/// Create the application router.
///
/// The gate is the innermost layer, so every route below sees requests
/// the gate has already classified, verified and header-scrubbed.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        // Public API surface (excluded from the gate by prefix)
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/:slug", get(jobs::get_job))
        // Authenticated pages
        .route("/dashboard", get(dashboard::dashboard))
        .route("/recruiter/postings", get(recruiter::my_postings))
        // Admin console
        .route("/admin/system/info", get(admin::system_info))
        .route("/admin/users", get(admin::list_users))
        .route(
            "/admin/gate/rules",
            get(admin::get_gate_rules).put(admin::put_gate_rules),
        )
        // Probes
        .route("/health", get(health::health))
        .route("/healthz", get(health::readiness));

    if let Some(handle) = metrics_handle {
        router = router.route(
            "/metrics",
            get(move || {
                let handle = handle.clone();
                async move { handle.render() }
            }),
        );
    }

    let cors = cors_layer(&state.config.cors_origins);
    let max_body = state.config.max_body_size;
    let gate = Arc::clone(&state.gate);

    router
        .layer(middleware::from_fn_with_state(
            gate,
            authorize_request::<JwtVerifier>,
        ))
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors)
        .with_state(state)
}
