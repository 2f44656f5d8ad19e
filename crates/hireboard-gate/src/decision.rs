//! The decision engine.
//!
//! A pure function from `(category set, credential outcome)` to exactly one
//! member of a closed decision set. No state survives between requests.

use hireboard_models::Role;

use crate::error::VerifyError;
use crate::rules::CategorySet;
use crate::verify::Claims;

/// Verified identity forwarded to downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject (user id).
    pub subject: String,
    /// Verified role.
    pub role: Role,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            role: claims.role,
        }
    }
}

/// What the extractor and verifier produced for this request.
#[derive(Debug, Clone)]
pub enum CredentialOutcome {
    /// No credential cookie was present.
    Missing,
    /// A credential was present but failed verification.
    Invalid(VerifyError),
    /// A credential was present and verified.
    Verified(Claims),
}

/// The closed set of per-request outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Pass the request through, annotated with the identity when one was
    /// verified (public paths carry none).
    Allow { identity: Option<Identity> },
    /// Redirect to the login page, carrying the original path so the client
    /// can resume after authenticating.
    RedirectToLogin { return_to: String },
    /// Redirect an authenticated but under-privileged user to the dashboard.
    /// Deliberately not a login redirect: the caller is already
    /// authenticated, and a login redirect would leak which paths exist.
    RedirectToDashboard,
    /// As `RedirectToLogin`, plus deletion of the poisoned credential cookie
    /// so the client does not retry with a dead token.
    RedirectToLoginClearCookie { return_to: String },
}

impl Decision {
    /// Stable label for metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow { .. } => "allow",
            Decision::RedirectToLogin { .. } => "redirect_login",
            Decision::RedirectToDashboard => "redirect_dashboard",
            Decision::RedirectToLoginClearCookie { .. } => "redirect_login_clear_cookie",
        }
    }
}

/// Combine a category set and credential outcome into a decision.
///
/// `return_to` is the original path-and-query, propagated byte-for-byte into
/// login redirects.
///
/// The admin gate is evaluated strictly before the recruiter gate: a path
/// tagged both AdminOnly and RecruiterOnly therefore admits only admins.
pub fn decide(categories: CategorySet, outcome: CredentialOutcome, return_to: &str) -> Decision {
    if categories.is_public() {
        return Decision::Allow { identity: None };
    }

    match outcome {
        CredentialOutcome::Missing => Decision::RedirectToLogin {
            return_to: return_to.to_string(),
        },
        CredentialOutcome::Invalid(_) => Decision::RedirectToLoginClearCookie {
            return_to: return_to.to_string(),
        },
        CredentialOutcome::Verified(claims) => {
            if categories.admin_only() && !claims.role.grants_admin_access() {
                return Decision::RedirectToDashboard;
            }
            if categories.recruiter_only() && !claims.role.grants_recruiter_access() {
                return Decision::RedirectToDashboard;
            }
            Decision::Allow {
                identity: Some(claims.into()),
            }
        }
    }
}
