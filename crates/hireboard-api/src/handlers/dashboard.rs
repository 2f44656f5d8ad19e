//! Dashboard handler for any authenticated user.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use hireboard_models::{Application, Role};

use crate::extract::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub user_id: String,
    pub role: Role,
    pub sections: Vec<&'static str>,
    pub applications: Vec<Application>,
}

/// Render the dashboard payload for the caller the gate let through.
pub async fn dashboard(State(state): State<AppState>, user: AuthUser) -> Json<DashboardResponse> {
    let mut sections = vec!["profile", "applications"];
    if user.role.grants_recruiter_access() {
        sections.push("postings");
    }
    if user.role.grants_admin_access() {
        sections.push("administration");
    }

    let applications = state
        .catalog
        .applications_for(&user.id)
        .into_iter()
        .cloned()
        .collect();

    Json(DashboardResponse {
        user_id: user.id,
        role: user.role,
        sections,
        applications,
    })
}
