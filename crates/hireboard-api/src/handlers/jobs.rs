//! Public job board handlers.
//!
//! Everything under `/api` bypasses the authorization gate, so these
//! handlers must only ever expose published postings.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use hireboard_models::JobPosting;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobSummary {
    pub slug: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: hireboard_models::EmploymentType,
}

impl From<&JobPosting> for JobSummary {
    fn from(job: &JobPosting) -> Self {
        Self {
            slug: job.slug.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type,
        }
    }
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobSummary>,
    pub total: usize,
}

/// List published postings.
pub async fn list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs: Vec<JobSummary> = state.catalog.published().into_iter().map(Into::into).collect();
    let total = jobs.len();
    Json(JobListResponse { jobs, total })
}

/// Fetch a single published posting by slug.
pub async fn get_job(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<JobPosting>> {
    state
        .catalog
        .find_published(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("No posting '{slug}'")))
}
