//! Stateless request authorization gate.
//!
//! Every inbound request flows through four cooperating steps:
//! 1. Path classification against a static prefix rule table ([`rules`])
//! 2. Bearer credential extraction from the `auth-token` cookie ([`credential`])
//! 3. Cryptographic JWT verification ([`verify`])
//! 4. A closed decision set materialized as an HTTP response
//!    ([`decision`], [`respond`])
//!
//! The gate holds no per-request state, performs no I/O on the request path,
//! and verifies tokens purely computationally, so it can run inline in front
//! of every request. The rule table is an immutable snapshot swapped
//! atomically on reload.

pub mod config;
pub mod credential;
pub mod decision;
pub mod error;
pub mod exclude;
pub mod metrics;
pub mod middleware;
pub mod respond;
pub mod rules;
pub mod verify;

mod gate;

pub use config::GateConfig;
pub use decision::{decide, CredentialOutcome, Decision, Identity};
pub use error::{GateError, VerifyError};
pub use exclude::Exclusions;
pub use gate::Gate;
pub use middleware::authorize_request;
pub use rules::{Category, CategorySet, PathRule, RuleTable, SharedRules};
pub use verify::{Claims, JwtVerifier, TokenVerifier};
