//! Gate configuration.

/// Configuration for the authorization gate.
///
/// All values are process-wide and fixed after startup; only the path rule
/// table supports reload (via [`crate::SharedRules`]).
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Shared secret used to verify token signatures.
    pub secret: String,
    /// Name of the cookie carrying the credential.
    pub cookie_name: String,
    /// Login page path used for unauthenticated redirects.
    pub login_path: String,
    /// Landing path for authenticated users without sufficient privilege.
    pub dashboard_path: String,
    /// Header carrying the verified subject downstream.
    pub user_id_header: String,
    /// Header carrying the verified role downstream.
    pub user_role_header: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            cookie_name: "auth-token".to_string(),
            login_path: "/auth/login".to_string(),
            dashboard_path: "/dashboard".to_string(),
            user_id_header: "x-user-id".to_string(),
            user_role_header: "x-user-role".to_string(),
        }
    }
}

impl GateConfig {
    /// Create a config with the given secret and default paths.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config from environment variables.
    ///
    /// `AUTH_TOKEN_SECRET` is required for the gate to start; the remaining
    /// variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("AUTH_TOKEN_SECRET").unwrap_or_default(),
            cookie_name: std::env::var("AUTH_COOKIE_NAME")
                .unwrap_or_else(|_| "auth-token".to_string()),
            login_path: std::env::var("AUTH_LOGIN_PATH")
                .unwrap_or_else(|_| "/auth/login".to_string()),
            dashboard_path: std::env::var("AUTH_DASHBOARD_PATH")
                .unwrap_or_else(|_| "/dashboard".to_string()),
            ..Default::default()
        }
    }
}
