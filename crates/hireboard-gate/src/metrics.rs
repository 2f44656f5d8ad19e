//! Gate metrics on the `metrics` facade.

use metrics::counter;

/// Metric names as constants for consistency.
pub mod names {
    pub const GATE_DECISIONS_TOTAL: &str = "hireboard_gate_decisions_total";
    pub const GATE_VERIFY_FAILURES_TOTAL: &str = "hireboard_gate_verify_failures_total";
    pub const GATE_EXCLUDED_TOTAL: &str = "hireboard_gate_excluded_total";
}

/// Record a decision by outcome label.
pub fn record_decision(outcome: &'static str) {
    let labels = [("outcome", outcome)];
    counter!(names::GATE_DECISIONS_TOTAL, &labels).increment(1);
}

/// Record a verification failure by taxonomy reason.
pub fn record_verify_failure(reason: &'static str) {
    let labels = [("reason", reason)];
    counter!(names::GATE_VERIFY_FAILURES_TOTAL, &labels).increment(1);
}

/// Record a request that bypassed the gate via the exclusion matcher.
pub fn record_excluded() {
    counter!(names::GATE_EXCLUDED_TOTAL).increment(1);
}
