//! End-to-end gate behavior through a real axum router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::get;
use axum::{middleware, Json, Router};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use hireboard_gate::{
    authorize_request, Claims, Gate, GateConfig, JwtVerifier, TokenVerifier, VerifyError,
};
use hireboard_models::Role;

const SECRET: &str = "integration-secret";

fn mint(sub: &str, role: Role, exp_offset_secs: i64) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        role,
        exp: chrono::Utc::now().timestamp() + exp_offset_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

/// Echo the identity headers the handler received.
async fn echo(headers: HeaderMap) -> Json<Value> {
    let get = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "user_id": get("x-user-id"),
        "user_role": get("x-user-role"),
    }))
}

fn app<V: TokenVerifier + 'static>(gate: Arc<Gate<V>>) -> Router {
    Router::new()
        .route("/jobs", get(echo))
        .route("/api/jobs", get(echo))
        .route("/dashboard", get(echo))
        .route("/recruiter/postings", get(echo))
        .route("/admin/users", get(echo))
        .layer(middleware::from_fn_with_state(
            gate,
            authorize_request::<V>,
        ))
}

fn jwt_app() -> Router {
    let gate = Gate::new(GateConfig::new(SECRET)).unwrap();
    app(Arc::new(gate))
}

fn request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = cookie {
        builder = builder.header(COOKIE, format!("auth-token={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn public_path_allows_anonymous() {
    let response = jwt_app().oneshot(request("/jobs", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], Value::Null);
    assert_eq!(body["user_role"], Value::Null);
}

#[tokio::test]
async fn public_path_performs_no_verification() {
    struct Spy(Arc<AtomicUsize>);
    impl TokenVerifier for Spy {
        fn verify(&self, _token: &str) -> Result<Claims, VerifyError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(VerifyError::Malformed)
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::with_verifier(GateConfig::new(SECRET), Spy(Arc::clone(&calls))).unwrap();
    let response = app(Arc::new(gate))
        .oneshot(request("/jobs", Some("anything.at.all")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_cookie_redirects_to_login_with_exact_return_path() {
    let response = jwt_app()
        .oneshot(request("/dashboard?tab=saved&page=2", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap();
    let encoded = location.strip_prefix("/auth/login?redirect=").unwrap();
    assert_eq!(
        urlencoding::decode(encoded).unwrap(),
        "/dashboard?tab=saved&page=2"
    );
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn candidate_on_admin_path_is_sent_to_dashboard_not_login() {
    let token = mint("cand-1", Role::Candidate, 3600);
    let response = jwt_app()
        .oneshot(request("/admin/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/dashboard");
}

#[tokio::test]
async fn tampered_signature_clears_cookie() {
    let mut token = mint("cand-1", Role::Candidate, 3600);
    let last = token.pop().unwrap();
    token.push(if last == 'A' { 'B' } else { 'A' });

    let response = jwt_app()
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with("/auth/login?redirect="));

    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with("auth-token="));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn expired_token_is_treated_like_a_bad_signature() {
    let token = mint("cand-1", Role::Candidate, -60);
    let response = jwt_app()
        .oneshot(request("/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(response.headers().get(SET_COOKIE).is_some());
}

#[tokio::test]
async fn admin_passes_recruiter_gate_with_injected_identity() {
    let token = mint("admin-1", Role::Admin, 3600);
    let response = jwt_app()
        .oneshot(request("/recruiter/postings", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], "admin-1");
    assert_eq!(body["user_role"], "admin");
}

#[tokio::test]
async fn spoofed_identity_headers_are_replaced_on_protected_paths() {
    let token = mint("real-user", Role::Candidate, 3600);
    let request = Request::builder()
        .uri("/dashboard")
        .header(COOKIE, format!("auth-token={token}"))
        .header("x-user-id", "forged-admin")
        .header("x-user-role", "admin")
        .body(Body::empty())
        .unwrap();

    let response = jwt_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], "real-user");
    assert_eq!(body["user_role"], "candidate");
}

#[tokio::test]
async fn excluded_api_namespace_passes_through_untouched() {
    // No cookie, no classification: the request reaches the handler as-is.
    let request = Request::builder()
        .uri("/api/jobs")
        .header("x-user-id", "client-supplied")
        .body(Body::empty())
        .unwrap();
    let response = jwt_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], "client-supplied");
}

#[tokio::test]
async fn gate_is_idempotent_for_identical_requests() {
    let token = mint("cand-1", Role::Candidate, 3600);
    let gate = Arc::new(Gate::new(GateConfig::new(SECRET)).unwrap());

    let first = gate.evaluate("/dashboard", None, Some(&token));
    let second = gate.evaluate("/dashboard", None, Some(&token));
    assert_eq!(first, second);
}
