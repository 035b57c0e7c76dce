// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login page and logout routes.

use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::cell::OnceCell;
use std::sync::Arc;

use crate::middleware::auth::{CookieSession, SESSION_COOKIE};
use crate::services::login::{LoginOutcome, RouterGateway};
use crate::services::redirect::ResolvedPath;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login_page))
        .route("/logout", post(logout))
}

const LOGIN_HTML: &str = "<!doctype html>\
<html lang=\"en\">\
<head><meta charset=\"utf-8\"><title>Login</title></head>\
<body><main><h1>Login</h1><p>Sign in to continue.</p></main></body>\
</html>";

/// Router view of a single HTTP request.
///
/// Query parameters are fully known once the request arrives, so it is always
/// ready. Navigation is recorded and turned into a redirect response.
pub struct RequestRouter {
    redirect: Option<String>,
    navigated: OnceCell<ResolvedPath>,
}

impl RequestRouter {
    /// Build from the raw query string. Only the first `redirect` value counts.
    pub fn from_query(query: Option<&str>) -> Self {
        let redirect = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "redirect")
                .map(|(_, value)| value.into_owned())
        });

        Self {
            redirect,
            navigated: OnceCell::new(),
        }
    }

    pub fn navigated(&self) -> Option<&ResolvedPath> {
        self.navigated.get()
    }
}

impl RouterGateway for RequestRouter {
    fn is_ready(&self) -> bool {
        true
    }

    fn redirect_query(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    fn navigate(&self, path: &ResolvedPath) {
        if self.navigated.set(path.clone()).is_err() {
            tracing::warn!(
                ignored = %path,
                kept = ?self.navigated.get().map(ResolvedPath::as_str),
                "Navigation already recorded for this request"
            );
        }
    }
}

/// Show the login page, or move signed-in users along.
async fn login_page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let router = RequestRouter::from_query(query.as_deref());
    let session = CookieSession::from_request(&jar, &headers, &state.config.jwt_signing_key);

    match state.login_page.on_update(&router, &session) {
        LoginOutcome::Redirected(path) => Redirect::to(path.as_str()).into_response(),
        LoginOutcome::RouterNotReady | LoginOutcome::Anonymous => {
            Html(LOGIN_HTML).into_response()
        }
    }
}

/// Logout - clear the session cookie.
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure())
        .max_age(time::Duration::ZERO);

    tracing::info!("Clearing session cookie");
    (jar.add(cookie), StatusCode::NO_CONTENT)
}
