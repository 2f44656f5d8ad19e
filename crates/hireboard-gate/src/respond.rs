//! Response materialization for redirect decisions.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::GateConfig;
use crate::decision::Decision;

/// Login URL carrying the original path as a `redirect` query parameter.
pub fn login_redirect_url(config: &GateConfig, return_to: &str) -> String {
    format!(
        "{}?redirect={}",
        config.login_path,
        urlencoding::encode(return_to)
    )
}

/// Materialize a redirect decision as an HTTP 307 response.
///
/// Returns `None` for `Allow`, which the middleware materializes by
/// forwarding the request instead of building a response.
pub fn redirect_response(decision: &Decision, config: &GateConfig) -> Option<Response> {
    match decision {
        Decision::Allow { .. } => None,
        Decision::RedirectToLogin { return_to } => {
            Some(Redirect::temporary(&login_redirect_url(config, return_to)).into_response())
        }
        Decision::RedirectToDashboard => {
            Some(Redirect::temporary(&config.dashboard_path).into_response())
        }
        Decision::RedirectToLoginClearCookie { return_to } => {
            // Removal cookie: Max-Age=0 with the site-wide path, so the
            // client stops replaying the dead token.
            let mut removal = Cookie::build((config.cookie_name.clone(), ""))
                .path("/")
                .build();
            removal.make_removal();
            let jar = CookieJar::new().add(removal);
            Some(
                (
                    jar,
                    Redirect::temporary(&login_redirect_url(config, return_to)),
                )
                    .into_response(),
            )
        }
    }
}
