//! Path classification rules.
//!
//! A request path is matched against an ordered list of prefix rules. A path
//! may match several rules; the resulting categories compose (an admin path
//! is also protected), so every rule is evaluated rather than stopping at
//! the first match. A path matching nothing is public.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Security category attached to a path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Public,
    Protected,
    RecruiterOnly,
    AdminOnly,
}

/// The composed category set a path belongs to.
///
/// `RecruiterOnly` and `AdminOnly` imply `Protected` in the default table,
/// but the set keeps them independent so a misconfigured table still
/// evaluates deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet {
    protected: bool,
    recruiter_only: bool,
    admin_only: bool,
}

impl CategorySet {
    /// The empty set, meaning public.
    pub const PUBLIC: CategorySet = CategorySet {
        protected: false,
        recruiter_only: false,
        admin_only: false,
    };

    /// Add a category to the set.
    pub fn insert(&mut self, category: Category) {
        match category {
            Category::Public => {}
            Category::Protected => self.protected = true,
            Category::RecruiterOnly => {
                self.recruiter_only = true;
                self.protected = true;
            }
            Category::AdminOnly => {
                self.admin_only = true;
                self.protected = true;
            }
        }
    }

    /// Whether no protected-family rule matched.
    pub fn is_public(&self) -> bool {
        !self.protected
    }

    /// Whether any protected-family rule matched.
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Whether the path is restricted to recruiters (and admins).
    pub fn recruiter_only(&self) -> bool {
        self.recruiter_only
    }

    /// Whether the path is restricted to admins.
    pub fn admin_only(&self) -> bool {
        self.admin_only
    }
}

/// A single prefix rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRule {
    /// Path prefix, e.g. `/admin`.
    pub prefix: String,
    /// Category granted when the prefix matches.
    pub category: Category,
}

impl PathRule {
    pub fn new(prefix: impl Into<String>, category: Category) -> Self {
        Self {
            prefix: prefix.into(),
            category,
        }
    }
}

/// An immutable snapshot of the rule table.
///
/// Classification is O(rules) with no I/O and no failure modes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<PathRule>,
}

impl RuleTable {
    /// Build a table from an ordered rule list.
    pub fn new(rules: Vec<PathRule>) -> Self {
        Self { rules }
    }

    /// The default job-board table: `/dashboard`, `/recruiter` and `/admin`
    /// are protected; `/recruiter` is recruiter-only, `/admin` admin-only.
    pub fn default_rules() -> Self {
        Self::new(vec![
            PathRule::new("/dashboard", Category::Protected),
            PathRule::new("/recruiter", Category::Protected),
            PathRule::new("/admin", Category::Protected),
            PathRule::new("/recruiter", Category::RecruiterOnly),
            PathRule::new("/admin", Category::AdminOnly),
        ])
    }

    /// Classify a path by evaluating every rule.
    pub fn classify(&self, path: &str) -> CategorySet {
        let mut set = CategorySet::default();
        for rule in &self.rules {
            if path.starts_with(rule.prefix.as_str()) {
                set.insert(rule.category);
            }
        }
        set
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }
}

/// Lock-free holder for the active rule snapshot.
///
/// Reload installs a whole new table via atomic swap; in-flight requests
/// keep the snapshot they loaded and never observe a partial update.
#[derive(Debug)]
pub struct SharedRules {
    inner: ArcSwap<RuleTable>,
}

impl SharedRules {
    pub fn new(table: RuleTable) -> Self {
        Self {
            inner: ArcSwap::from_pointee(table),
        }
    }

    /// Load the current snapshot.
    pub fn load(&self) -> Arc<RuleTable> {
        self.inner.load_full()
    }

    /// Atomically install a new snapshot.
    pub fn store(&self, table: RuleTable) {
        self.inner.store(Arc::new(table));
    }
}

impl Default for SharedRules {
    fn default() -> Self {
        Self::new(RuleTable::default_rules())
    }
}
