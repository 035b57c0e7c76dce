// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login page controller.
//!
//! When the login page is shown to someone who is already signed in, send
//! them on to wherever they were going (the `redirect` query parameter), as
//! long as that target is on our own origin.

use crate::models::SessionUser;
use crate::services::redirect::{ResolvedPath, SafeRedirectResolver};

/// Navigation surface the controller drives.
pub trait RouterGateway {
    /// Whether query parameters are available yet.
    fn is_ready(&self) -> bool;

    /// Raw `redirect` query value, if any.
    fn redirect_query(&self) -> Option<&str>;

    /// Replace the current location with `path`.
    fn navigate(&self, path: &ResolvedPath);
}

/// Reports who, if anyone, is signed in.
pub trait SessionProvider {
    fn user(&self) -> Option<SessionUser>;
}

/// What the controller did on an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Router not ready; nothing happened.
    RouterNotReady,
    /// No session; the login form should be shown.
    Anonymous,
    /// Already signed in; navigated to the contained path.
    Redirected(ResolvedPath),
}

pub struct LoginPage {
    resolver: SafeRedirectResolver,
}

impl LoginPage {
    pub fn new(resolver: SafeRedirectResolver) -> Self {
        Self { resolver }
    }

    /// Run the redirect check against the current router and session state.
    ///
    /// Call again whenever either collaborator changes. `navigate` is invoked
    /// at most once per call.
    pub fn on_update<R, S>(&self, router: &R, session: &S) -> LoginOutcome
    where
        R: RouterGateway + ?Sized,
        S: SessionProvider + ?Sized,
    {
        if !router.is_ready() {
            return LoginOutcome::RouterNotReady;
        }

        let Some(user) = session.user() else {
            return LoginOutcome::Anonymous;
        };

        let destination = self.resolver.resolve(router.redirect_query());
        tracing::info!(
            user_id = %user.id,
            destination = %destination,
            "Already signed in, leaving login page"
        );
        router.navigate(&destination);

        LoginOutcome::Redirected(destination)
    }
}
