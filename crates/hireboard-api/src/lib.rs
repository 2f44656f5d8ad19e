//! Axum HTTP API server for the Hireboard job board.
//!
//! This crate provides:
//! - The edge router with the authorization gate in front of every page route
//! - Public job catalog endpoints under the gate-excluded `/api` namespace
//! - Security headers, CORS, request ids and request logging
//! - Prometheus metrics

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use catalog::JobCatalog;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use extract::AuthUser;
pub use routes::create_router;
pub use state::AppState;
