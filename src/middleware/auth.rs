// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JWT session middleware.

use crate::error::{AppError, Result};
use crate::models::SessionUser;
use crate::services::login::SessionProvider;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "login_gate_token";

/// JWT claims structure.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// Pull the session token from the cookie, falling back to a bearer header.
fn session_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Decode the session attached to a request.
///
/// `Ok(None)` means no token was presented at all.
pub fn decode_session(
    jar: &CookieJar,
    headers: &HeaderMap,
    signing_key: &[u8],
) -> Result<Option<SessionUser>> {
    let Some(token) = session_token(jar, headers) else {
        return Ok(None);
    };

    let key = DecodingKey::from_secret(signing_key);
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(&token, &key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting session token");
        AppError::InvalidToken
    })?;

    if token_data.claims.sub.is_empty() {
        return Err(AppError::InvalidToken);
    }

    Ok(Some(SessionUser::new(token_data.claims.sub)))
}

/// Request-scoped session state backed by the JWT cookie.
///
/// Invalid or expired tokens count as signed out.
#[derive(Debug, Clone, Default)]
pub struct CookieSession {
    user: Option<SessionUser>,
}

impl CookieSession {
    pub fn from_request(jar: &CookieJar, headers: &HeaderMap, signing_key: &[u8]) -> Self {
        let user = decode_session(jar, headers, signing_key).unwrap_or_default();
        Self { user }
    }
}

impl SessionProvider for CookieSession {
    fn user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

/// Middleware that requires a valid session (API routes).
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = decode_session(&jar, request.headers(), &state.config.jwt_signing_key)?
        .ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Middleware for pages: anonymous visitors are sent to the login page with
/// the page they wanted in `redirect`.
pub async fn require_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match decode_session(&jar, request.headers(), &state.config.jwt_signing_key) {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        _ => {
            let wanted = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str())
                .unwrap_or("/");
            let location = format!("/login?redirect={}", urlencoding::encode(wanted));
            Redirect::to(&location).into_response()
        }
    }
}

/// Create a JWT for a user session.
pub fn create_jwt(user_id: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + 30 * 24 * 60 * 60, // 30 days
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

    #[test]
    fn test_no_token_is_anonymous() {
        let result = decode_session(&CookieJar::new(), &HeaderMap::new(), KEY).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_bearer_token_accepted() {
        let token = create_jwt("user123", KEY).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let user = decode_session(&CookieJar::new(), &headers, KEY).unwrap();
        assert_eq!(user, Some(SessionUser::new("user123")));
    }

    #[test]
    fn test_cookie_token_accepted() {
        let token = create_jwt("user123", KEY).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}")).unwrap(),
        );
        let jar = CookieJar::from_headers(&headers);

        let session = CookieSession::from_request(&jar, &HeaderMap::new(), KEY);
        assert_eq!(session.user(), Some(SessionUser::new("user123")));
    }

    #[test]
    fn test_wrong_key_is_invalid() {
        let token = create_jwt("user123", b"some_other_key_entirely_1234567!").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        let result = decode_session(&CookieJar::new(), &headers, KEY);
        assert!(matches!(result, Err(AppError::InvalidToken)));

        let session = CookieSession::from_request(&CookieJar::new(), &headers, KEY);
        assert!(session.user().is_none());
    }
}
