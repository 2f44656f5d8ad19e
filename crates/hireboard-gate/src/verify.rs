//! Token verification.
//!
//! Verification is purely computational: an HMAC signature check plus a
//! timestamp comparison. No network, cache, or store is consulted, which is
//! what lets the gate run inline on every request.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use hireboard_models::Role;

use crate::error::{GateError, VerifyError};

/// Verified, trusted token payload.
///
/// Only produced by a successful signature check with an unexpired `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: String,
    /// Assigned role.
    pub role: Role,
    /// Expiry as a Unix timestamp (seconds).
    pub exp: i64,
}

/// Seam for credential verification.
///
/// The gate only calls the verifier for protected paths, so tests can wrap
/// an implementation with a counter to prove public paths skip
/// cryptographic work entirely.
pub trait TokenVerifier: Send + Sync {
    /// Verify a raw credential and extract its claims.
    fn verify(&self, token: &str) -> Result<Claims, VerifyError>;
}

/// HS256 verifier over a statically configured shared secret.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Create a verifier.
    ///
    /// An empty secret is a fatal misconfiguration: failing open (treating
    /// unverifiable tokens as valid) is forbidden, so construction errors
    /// instead of degrading.
    pub fn new(secret: &str) -> Result<Self, GateError> {
        if secret.is_empty() {
            return Err(GateError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; a token expiring now is already invalid.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<Claims, VerifyError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}
