// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use login_gate::config::Config;
use login_gate::middleware::auth::{create_jwt, SESSION_COOKIE};
use login_gate::routes::create_router;
use login_gate::AppState;
use std::sync::Arc;

/// Create a test app with the default test config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_origin("http://tabnews.local")
}

/// Create a test app served from `origin`.
#[allow(dead_code)]
pub fn create_test_app_with_origin(origin: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        app_origin: origin.to_string(),
        ..Config::test_default()
    };
    let state = Arc::new(AppState::new(config));

    (create_router(state.clone()), state)
}

/// `Cookie` header value carrying a valid session for `user_id`.
#[allow(dead_code)]
pub fn session_cookie(state: &AppState, user_id: &str) -> String {
    let token =
        create_jwt(user_id, &state.config.jwt_signing_key).expect("Failed to create JWT");
    format!("{SESSION_COOKIE}={token}")
}
