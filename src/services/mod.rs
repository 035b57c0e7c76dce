// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod login;
pub mod redirect;

pub use login::{LoginOutcome, LoginPage, RouterGateway, SessionProvider};
pub use redirect::{ResolvedPath, SafeRedirectResolver};
