//! Recruiter-only handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use hireboard_models::JobPosting;

use crate::error::{ApiError, ApiResult};
use crate::extract::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PostingsResponse {
    pub recruiter_id: String,
    pub postings: Vec<JobPosting>,
}

/// List the caller's own postings, drafts included.
///
/// The gate already redirected non-recruiters away from `/recruiter`;
/// the role check here covers direct API callers.
pub async fn my_postings(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<PostingsResponse>> {
    if !user.role.grants_recruiter_access() {
        return Err(ApiError::forbidden("Recruiter access required"));
    }

    let postings = state
        .catalog
        .for_recruiter(&user.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(PostingsResponse {
        recruiter_id: user.id,
        postings,
    }))
}
