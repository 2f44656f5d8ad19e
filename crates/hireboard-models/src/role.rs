//! User roles and access levels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role enumeration, ordered by privilege.
///
/// The ordering matters: `Admin` implies every capability of `Recruiter`,
/// which in turn implies every capability of `Candidate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Candidate,
    Recruiter,
    Admin,
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl Role {
    /// Get the role name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "candidate",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
        }
    }

    /// Whether this role may use recruiter surfaces.
    ///
    /// Admins are a superset of recruiters.
    pub fn grants_recruiter_access(&self) -> bool {
        matches!(self, Role::Recruiter | Role::Admin)
    }

    /// Whether this role may use admin surfaces.
    pub fn grants_admin_access(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "candidate" => Ok(Role::Candidate),
            "recruiter" => Ok(Role::Recruiter),
            "admin" => Ok(Role::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [Role::Candidate, Role::Recruiter, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("RECRUITER".parse::<Role>().unwrap(), Role::Recruiter);
    }

    #[test]
    fn test_role_parse_unknown() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_recruiter_access_is_superset() {
        assert!(!Role::Candidate.grants_recruiter_access());
        assert!(Role::Recruiter.grants_recruiter_access());
        assert!(Role::Admin.grants_recruiter_access());
    }

    #[test]
    fn test_admin_access() {
        assert!(!Role::Candidate.grants_admin_access());
        assert!(!Role::Recruiter.grants_admin_access());
        assert!(Role::Admin.grants_admin_access());
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"recruiter\"").unwrap();
        assert_eq!(parsed, Role::Recruiter);
    }

    #[test]
    fn test_role_ordering() {
        assert!(Role::Candidate < Role::Recruiter);
        assert!(Role::Recruiter < Role::Admin);
    }
}
