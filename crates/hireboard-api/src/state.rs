//! Application state.

use std::sync::Arc;

use hireboard_gate::{Gate, GateConfig, GateError};
use hireboard_models::UserAccount;

use crate::catalog::{seed_accounts, JobCatalog};
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub gate: Arc<Gate>,
    pub catalog: Arc<JobCatalog>,
    pub accounts: Arc<Vec<UserAccount>>,
}

impl AppState {
    /// Create new application state.
    ///
    /// Gate construction is fallible on purpose: a missing verification
    /// secret must abort startup instead of failing open at request time.
    pub fn new(config: ApiConfig, gate_config: GateConfig) -> Result<Self, GateError> {
        let gate = Gate::new(gate_config)?;
        Ok(Self {
            config,
            gate: Arc::new(gate),
            catalog: Arc::new(JobCatalog::seeded()),
            accounts: Arc::new(seed_accounts()),
        })
    }
}
