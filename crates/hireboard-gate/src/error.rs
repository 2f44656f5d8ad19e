//! Gate error types.

use thiserror::Error;

/// Fatal configuration errors surfaced at gate construction.
///
/// Anything here prevents startup; the gate never fails open per-request.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Verification secret is empty or missing")]
    EmptySecret,

    #[error("Invalid exclusion pattern: {0}")]
    InvalidExclusion(String),

    #[error("Invalid identity header name: {0}")]
    InvalidHeaderName(String),
}

/// Why a credential failed verification.
///
/// Every variant collapses to the same externally visible outcome (redirect
/// to login with the cookie cleared), but the reason is kept for logs and
/// metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    SignatureInvalid,

    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("token expired")]
    Expired,
}

impl VerifyError {
    /// Stable label for metrics and structured logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyError::Malformed => "malformed",
            VerifyError::SignatureInvalid => "signature_invalid",
            VerifyError::UnsupportedAlgorithm => "unsupported_algorithm",
            VerifyError::Expired => "expired",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerifyError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature | ErrorKind::ImmatureSignature => VerifyError::Expired,
            ErrorKind::InvalidSignature => VerifyError::SignatureInvalid,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                VerifyError::UnsupportedAlgorithm
            }
            // Structural problems: bad segment count, bad base64, bad JSON,
            // missing required claims, unknown role strings.
            _ => VerifyError::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_error_labels_are_distinct() {
        let labels = [
            VerifyError::Malformed.as_str(),
            VerifyError::SignatureInvalid.as_str(),
            VerifyError::UnsupportedAlgorithm.as_str(),
            VerifyError::Expired.as_str(),
        ];
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }
}
