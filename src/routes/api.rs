// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated API and page routes.

use axum::{
    response::Html,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

use crate::models::SessionUser;
use crate::AppState;

/// JSON endpoints; mounted behind `require_auth`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", get(me))
}

/// Pages; mounted behind `require_login`.
pub fn pages() -> Router<Arc<AppState>> {
    Router::new().route("/perfil", get(profile))
}

/// Current session user.
async fn me(Extension(user): Extension<SessionUser>) -> Json<SessionUser> {
    Json(user)
}

async fn profile(Extension(user): Extension<SessionUser>) -> Html<&'static str> {
    tracing::debug!(user_id = %user.id, "Serving profile page");
    Html("<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>Profile</title></head><body><main><h1>Profile</h1></main></body></html>")
}
