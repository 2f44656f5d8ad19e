//! In-memory job catalog.
//!
//! Stands in for the remote data service the real deployment talks to. The
//! gate never touches this; it exists so the public `/api` surface and the
//! protected recruiter views have something to serve.

use hireboard_models::{Application, JobPosting, JobStatus, Role, UserAccount};

/// Read-only catalog of postings and applications, seeded at startup.
#[derive(Debug, Default)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
    applications: Vec<Application>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobPosting>, applications: Vec<Application>) -> Self {
        Self { jobs, applications }
    }

    /// Demo seed used when no upstream data service is configured.
    pub fn seeded() -> Self {
        let jobs = vec![
            JobPosting::new("Senior Rust Engineer", "Ferrous Systems", "rec-1")
                .with_location("Berlin")
                .with_description("Own the storage engine.")
                .published(),
            JobPosting::new("Platform Engineer", "Acme Cloud", "rec-1")
                .with_description("Kubernetes wrangling at scale.")
                .published(),
            JobPosting::new("Engineering Manager", "Initech", "rec-2")
                .with_location("Austin")
                .published(),
            // Draft: must never appear on the public board.
            JobPosting::new("Stealth Role", "Initech", "rec-2"),
        ];
        let applications = vec![
            Application::new(jobs[0].id, "cand-1", "Ten years of systems work."),
            Application::new(jobs[2].id, "cand-1", "Led two platform teams."),
            Application::new(jobs[1].id, "cand-2", "Happy to relocate."),
        ];
        Self::new(jobs, applications)
    }

    /// Published postings, board order.
    pub fn published(&self) -> Vec<&JobPosting> {
        self.jobs
            .iter()
            .filter(|j| j.status.is_public())
            .collect()
    }

    /// Look up a published posting by slug.
    pub fn find_published(&self, slug: &str) -> Option<&JobPosting> {
        self.jobs
            .iter()
            .find(|j| j.slug == slug && j.status.is_public())
    }

    /// All postings owned by a recruiter, drafts included.
    pub fn for_recruiter(&self, recruiter_id: &str) -> Vec<&JobPosting> {
        self.jobs
            .iter()
            .filter(|j| j.recruiter_id == recruiter_id)
            .collect()
    }

    /// Applications submitted by a candidate.
    pub fn applications_for(&self, candidate_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|a| a.candidate_id == candidate_id)
            .collect()
    }

    /// Total postings, any status.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Demo account directory for the admin console.
pub fn seed_accounts() -> Vec<UserAccount> {
    vec![
        UserAccount::new("cand-1", "Ada Candidate", "ada@example.com"),
        UserAccount::new("cand-2", "Lin Candidate", "lin@example.com"),
        UserAccount::new("rec-1", "Grace Recruiter", "grace@ferrous.example").with_role(Role::Recruiter),
        UserAccount::new("rec-2", "Mel Recruiter", "mel@initech.example").with_role(Role::Recruiter),
        UserAccount::new("admin-1", "Sam Admin", "sam@hireboard.example").with_role(Role::Admin),
    ]
}
