// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Login-Gate: login page with safe post-login redirects
//!
//! This crate serves the login page and decides, for users who are already
//! signed in, where to send them next without ever leaving the app's origin.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{LoginPage, SafeRedirectResolver};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub login_page: LoginPage,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let login_page = LoginPage::new(SafeRedirectResolver::new(&config.app_origin));
        Self { config, login_page }
    }
}
