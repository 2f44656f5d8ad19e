//! User accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user account as stored by the identity service.
///
/// The gate never loads accounts; downstream handlers receive the verified
/// subject and role via injected headers and may hydrate the rest lazily.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Stable user identifier (the JWT `sub` claim).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Assigned role.
    pub role: Role,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a new account with the default role.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: Role::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults_to_candidate() {
        let account = UserAccount::new("u1", "Ada", "ada@example.com");
        assert_eq!(account.role, Role::Candidate);
    }

    #[test]
    fn test_with_role() {
        let account = UserAccount::new("u2", "Grace", "grace@example.com").with_role(Role::Recruiter);
        assert_eq!(account.role, Role::Recruiter);
    }
}
