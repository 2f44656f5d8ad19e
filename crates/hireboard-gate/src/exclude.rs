//! Pass-through exclusions.
//!
//! Certain namespaces are never classified at all: the data API, health and
//! metrics endpoints, and static assets. These requests bypass the gate
//! entirely and are forwarded untouched. The exclusion list is external
//! configuration, not part of the decision logic.

use regex_lite::Regex;

use crate::error::GateError;

/// Default excluded prefixes.
const DEFAULT_PREFIXES: &[&str] = &["/api", "/health", "/healthz", "/metrics", "/favicon.ico"];

/// Default asset-extension pattern.
const DEFAULT_ASSET_PATTERN: &str = r"\.(?:svg|png|jpg|jpeg|gif|webp|ico|css|js|map|woff2?)$";

/// Matcher deciding which paths bypass the gate.
#[derive(Debug, Clone)]
pub struct Exclusions {
    prefixes: Vec<String>,
    asset_pattern: Regex,
}

impl Exclusions {
    /// Build a matcher from explicit prefixes and an asset-extension regex.
    pub fn new(prefixes: Vec<String>, asset_pattern: &str) -> Result<Self, GateError> {
        let asset_pattern = Regex::new(asset_pattern)
            .map_err(|e| GateError::InvalidExclusion(e.to_string()))?;
        Ok(Self {
            prefixes,
            asset_pattern,
        })
    }

    /// Whether a path bypasses classification entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
            || self.asset_pattern.is_match(path)
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        // The defaults are compile-time constants and always parse.
        Self::new(
            DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_ASSET_PATTERN,
        )
        .expect("default exclusion pattern is valid")
    }
}
