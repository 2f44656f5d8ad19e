//! Candidate applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Submitted,
    Reviewed,
    Rejected,
    Accepted,
}

/// An application a candidate submitted to a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Application identifier.
    pub id: Uuid,
    /// Target posting.
    pub job_id: Uuid,
    /// Applying candidate (user id).
    pub candidate_id: String,
    /// Cover note.
    pub note: String,
    /// Lifecycle state.
    pub status: ApplicationStatus,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    /// Create a new submitted application.
    pub fn new(job_id: Uuid, candidate_id: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            candidate_id: candidate_id.into(),
            note: note.into(),
            status: ApplicationStatus::default(),
            submitted_at: Utc::now(),
        }
    }
}
