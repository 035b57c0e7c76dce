// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post-login redirect target validation.
//!
//! The `redirect` query parameter on the login page is untrusted input. Before
//! navigating to it we make sure it stays on our own origin; anything else
//! (cross-origin URLs, opaque schemes, garbage) falls back to `/`.

use std::fmt;
use url::Url;

/// Path used whenever a candidate is absent, malformed, or off-origin.
pub const FALLBACK_PATH: &str = "/";

/// A same-origin absolute path (with query and fragment) safe to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// The `/` fallback.
    pub fn fallback() -> Self {
        Self(FALLBACK_PATH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_PATH
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for ResolvedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Resolves untrusted redirect candidates against a trusted origin.
///
/// The trusted origin is parsed once. If it cannot be parsed every candidate
/// resolves to the fallback.
#[derive(Debug, Clone)]
pub struct SafeRedirectResolver {
    base: Option<Url>,
}

impl SafeRedirectResolver {
    pub fn new(trusted_origin: &str) -> Self {
        let base = match Url::parse(trusted_origin) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(
                    origin = %trusted_origin,
                    error = %e,
                    "Trusted origin is not a valid URL, all redirects will fall back"
                );
                None
            }
        };
        Self { base }
    }

    /// Decide where to navigate after login. Never fails.
    pub fn resolve(&self, candidate: Option<&str>) -> ResolvedPath {
        let Some(base) = &self.base else {
            return ResolvedPath::fallback();
        };

        let candidate = match candidate {
            Some(c) if !c.is_empty() => c,
            _ => return ResolvedPath::fallback(),
        };

        let parsed = if candidate.starts_with('/') {
            base.join(candidate)
        } else {
            Url::parse(candidate)
        };

        let url = match parsed {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(candidate, error = %e, "Unparsable redirect target");
                return ResolvedPath::fallback();
            }
        };

        // Opaque origins never compare equal, so `javascript:` and friends land here.
        if url.origin() != base.origin() {
            tracing::debug!(
                candidate,
                origin = %url.origin().ascii_serialization(),
                "Rejecting cross-origin redirect target"
            );
            return ResolvedPath::fallback();
        }

        ResolvedPath(path_with_suffix(&url))
    }
}

/// Convenience wrapper for one-off checks.
pub fn resolve(candidate: Option<&str>, trusted_origin: &str) -> ResolvedPath {
    SafeRedirectResolver::new(trusted_origin).resolve(candidate)
}

fn path_with_suffix(url: &Url) -> String {
    let mut out = url.path().to_string();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
