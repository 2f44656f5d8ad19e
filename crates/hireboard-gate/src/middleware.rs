//! Axum middleware wiring the gate into the request pipeline.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, Response};
use axum::middleware::Next;
use tracing::warn;

use crate::credential::extract_credential;
use crate::decision::Decision;
use crate::gate::Gate;
use crate::metrics;
use crate::respond;
use crate::verify::TokenVerifier;

/// Authorize one request.
///
/// Excluded paths (data API, health, assets) pass through untouched. For
/// everything else the gate evaluates and either forwards the request with
/// injected identity headers or short-circuits with a redirect.
pub async fn authorize_request<V: TokenVerifier + 'static>(
    State(gate): State<Arc<Gate<V>>>,
    mut request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let path = request.uri().path().to_string();

    if gate.is_excluded(&path) {
        metrics::record_excluded();
        return next.run(request).await;
    }

    let query = request.uri().query().map(str::to_string);
    let credential = extract_credential(request.headers(), &gate.config().cookie_name);
    let decision = gate.evaluate(&path, query.as_deref(), credential.as_deref());
    metrics::record_decision(decision.as_str());

    match decision {
        Decision::Allow { identity: None } => next.run(request).await,
        Decision::Allow {
            identity: Some(identity),
        } => {
            let (id_header, role_header) = gate.identity_headers();
            let headers = request.headers_mut();

            // The gate's identity replaces anything the client supplied
            // under these names; all other headers are left alone.
            headers.remove(id_header);
            headers.remove(role_header);
            match HeaderValue::from_str(&identity.subject) {
                Ok(value) => {
                    headers.insert(id_header.clone(), value);
                }
                Err(_) => {
                    warn!(subject = %identity.subject, "subject not header-safe, omitting");
                }
            }
            headers.insert(
                role_header.clone(),
                HeaderValue::from_static(identity.role.as_str()),
            );

            next.run(request).await
        }
        redirect => respond::redirect_response(&redirect, gate.config())
            .expect("redirect decisions always build a response"),
    }
}
