//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup. A `.env` file is honored for local
//! development.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scheme + host (+ port) the app is served from. Post-login redirects
    /// never leave this origin.
    pub app_origin: String,
    /// Server port
    pub port: u16,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            app_origin: "http://localhost:3000".to_string(),
            port: 8080,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let app_origin = env::var("APP_ORIGIN")
            .map(|v| normalize_origin(&v))
            .unwrap_or_else(|_| Ok("http://localhost:3000".to_string()))?;

        Ok(Self {
            app_origin,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Whether cookies must carry the `Secure` attribute.
    pub fn cookie_secure(&self) -> bool {
        self.app_origin.starts_with("https://")
    }
}

/// Reduce a configured origin to its canonical `scheme://host[:port]` form.
///
/// Only `http` and `https` with a host are accepted; anything with an opaque
/// origin would make every redirect fall back to `/`.
pub fn normalize_origin(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let invalid = || ConfigError::Invalid("APP_ORIGIN", raw.to_string());

    let url = url::Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }

    Ok(url.origin().ascii_serialization())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
