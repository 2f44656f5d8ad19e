//! The gate itself: classification, extraction, verification, decision.

use std::sync::Arc;

use axum::http::HeaderName;
use tracing::debug;

use crate::config::GateConfig;
use crate::decision::{decide, CredentialOutcome, Decision};
use crate::error::GateError;
use crate::exclude::Exclusions;
use crate::metrics;
use crate::rules::{RuleTable, SharedRules};
use crate::verify::{JwtVerifier, TokenVerifier};

/// Per-request authorization gate.
///
/// Stateless across requests: everything a decision needs is derived from
/// the single incoming request plus immutable configuration. The only
/// mutable piece is the rule snapshot, replaced wholesale by atomic swap.
pub struct Gate<V: TokenVerifier = JwtVerifier> {
    config: GateConfig,
    rules: SharedRules,
    exclusions: Exclusions,
    verifier: V,
    id_header: HeaderName,
    role_header: HeaderName,
}

impl Gate<JwtVerifier> {
    /// Create a gate with the default rule table and exclusions.
    ///
    /// Fails on fatal misconfiguration (empty secret, bad header names)
    /// rather than degrading at request time.
    pub fn new(config: GateConfig) -> Result<Self, GateError> {
        let verifier = JwtVerifier::new(&config.secret)?;
        Self::with_verifier(config, verifier)
    }
}

impl<V: TokenVerifier> Gate<V> {
    /// Create a gate with an explicit verifier implementation.
    pub fn with_verifier(config: GateConfig, verifier: V) -> Result<Self, GateError> {
        let id_header = HeaderName::from_bytes(config.user_id_header.as_bytes())
            .map_err(|_| GateError::InvalidHeaderName(config.user_id_header.clone()))?;
        let role_header = HeaderName::from_bytes(config.user_role_header.as_bytes())
            .map_err(|_| GateError::InvalidHeaderName(config.user_role_header.clone()))?;

        Ok(Self {
            config,
            rules: SharedRules::default(),
            exclusions: Exclusions::default(),
            verifier,
            id_header,
            role_header,
        })
    }

    /// Replace the initial rule table.
    pub fn with_rules(self, table: RuleTable) -> Self {
        self.rules.store(table);
        self
    }

    /// Replace the exclusion matcher.
    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Gate configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Parsed identity header names.
    pub fn identity_headers(&self) -> (&HeaderName, &HeaderName) {
        (&self.id_header, &self.role_header)
    }

    /// Current rule snapshot.
    pub fn rules_snapshot(&self) -> Arc<RuleTable> {
        self.rules.load()
    }

    /// Atomically install a new rule table; in-flight requests keep the
    /// snapshot they already loaded.
    pub fn reload_rules(&self, table: RuleTable) {
        self.rules.store(table);
    }

    /// Whether the path bypasses the gate entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.is_excluded(path)
    }

    /// Evaluate one request.
    ///
    /// Public paths short-circuit before the verifier is consulted, so no
    /// cryptographic work happens for unprotected traffic.
    pub fn evaluate(&self, path: &str, query: Option<&str>, credential: Option<&str>) -> Decision {
        let categories = self.rules.load().classify(path);
        if categories.is_public() {
            return Decision::Allow { identity: None };
        }

        let return_to = match query {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.to_string(),
        };

        let outcome = match credential {
            None => CredentialOutcome::Missing,
            Some(token) => match self.verifier.verify(token) {
                Ok(claims) => CredentialOutcome::Verified(claims),
                Err(reason) => {
                    debug!(path = %path, reason = %reason, "credential rejected");
                    metrics::record_verify_failure(reason.as_str());
                    CredentialOutcome::Invalid(reason)
                }
            },
        };

        decide(categories, outcome, &return_to)
    }
}
