//! Job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Posting lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Draft,
    Published,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Published => "published",
            JobStatus::Closed => "closed",
        }
    }

    /// Whether the posting is visible on the public board.
    pub fn is_public(&self) -> bool {
        matches!(self, JobStatus::Published)
    }
}

/// Employment type attached to a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

/// A job posting on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    /// Posting identifier.
    pub id: Uuid,
    /// URL-safe slug used in public links.
    pub slug: String,
    /// Posting title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Location (free-form, may be "Remote").
    pub location: String,
    /// Employment type.
    pub employment_type: EmploymentType,
    /// Posting body (markdown).
    pub description: String,
    /// Owning recruiter (user id).
    pub recruiter_id: String,
    /// Lifecycle state.
    pub status: JobStatus,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Create a new draft posting owned by a recruiter.
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        recruiter_id: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            slug,
            title,
            company: company.into(),
            location: "Remote".to_string(),
            employment_type: EmploymentType::default(),
            description: String::new(),
            recruiter_id: recruiter_id.into(),
            status: JobStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the description body.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the posting as published.
    pub fn published(mut self) -> Self {
        self.status = JobStatus::Published;
        self
    }
}

/// Build a URL-safe slug from a title.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and trims leading/trailing hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Senior Rust Engineer"), "senior-rust-engineer");
        assert_eq!(slugify("C++ Developer (Berlin)"), "c-developer-berlin");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_new_posting_is_draft() {
        let job = JobPosting::new("Backend Engineer", "Acme", "rec-1");
        assert_eq!(job.status, JobStatus::Draft);
        assert!(!job.status.is_public());
        assert_eq!(job.slug, "backend-engineer");
    }

    #[test]
    fn test_published_is_public() {
        let job = JobPosting::new("Backend Engineer", "Acme", "rec-1").published();
        assert!(job.status.is_public());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&JobStatus::Published).unwrap(), "\"published\"");
        assert_eq!(
            serde_json::to_string(&EmploymentType::FullTime).unwrap(),
            "\"full-time\""
        );
    }
}
