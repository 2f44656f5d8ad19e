//! Admin-only handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use hireboard_gate::RuleTable;
use hireboard_models::UserAccount;

use crate::error::{ApiError, ApiResult};
use crate::extract::AuthUser;
use crate::state::AppState;

fn require_admin(user: &AuthUser) -> Result<(), ApiError> {
    if user.role.grants_admin_access() {
        Ok(())
    } else {
        Err(ApiError::forbidden("Admin access required"))
    }
}

#[derive(Serialize)]
pub struct SystemInfoResponse {
    pub version: &'static str,
    pub environment: String,
    pub catalog_size: usize,
    pub gate_rules: usize,
}

/// System information for the admin console.
pub async fn system_info(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<SystemInfoResponse>> {
    require_admin(&user)?;

    Ok(Json(SystemInfoResponse {
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        catalog_size: state.catalog.len(),
        gate_rules: state.gate.rules_snapshot().rules().len(),
    }))
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserAccount>,
    pub total: usize,
}

/// Seeded account directory.
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<UsersResponse>> {
    require_admin(&user)?;

    let users = state.accounts.as_ref().clone();
    let total = users.len();
    Ok(Json(UsersResponse { users, total }))
}

/// Current gate rule table.
pub async fn get_gate_rules(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<RuleTable>> {
    require_admin(&user)?;
    Ok(Json(state.gate.rules_snapshot().as_ref().clone()))
}

#[derive(Serialize)]
pub struct RulesUpdatedResponse {
    pub updated: bool,
    pub rules: usize,
}

/// Replace the gate rule table. Takes effect for in-flight traffic
/// without a restart.
pub async fn put_gate_rules(
    State(state): State<AppState>,
    user: AuthUser,
    Json(table): Json<RuleTable>,
) -> ApiResult<Json<RulesUpdatedResponse>> {
    require_admin(&user)?;

    let rules = table.rules().len();
    state.gate.reload_rules(table);
    info!(admin = %user.id, rules, "Gate rule table replaced");

    Ok(Json(RulesUpdatedResponse {
        updated: true,
        rules,
    }))
}
