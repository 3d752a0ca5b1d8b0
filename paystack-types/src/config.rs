//! Client configuration.

use std::env;
use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Paystack's production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co/";

/// Environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "PAYSTACK_SECRET_KEY";

/// Environment variable overriding the API root.
pub const BASE_URL_VAR: &str = "PAYSTACK_BASE_URL";

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Immutable client configuration.
///
/// Built once at startup and shared by every request a client issues.
/// The secret key is never exposed through `Debug`.
pub struct ClientConfig {
    base_url: String,
    secret_key: SecretString,
}

impl ClientConfig {
    /// Creates a configuration from explicit values.
    ///
    /// Nothing is validated here: an empty key still produces a
    /// `Bearer ` header and the remote API rejects it.
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        let secret_key: String = secret_key.into();
        Self {
            base_url: base_url.into(),
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Loads configuration from `PAYSTACK_SECRET_KEY` and `PAYSTACK_BASE_URL`.
    ///
    /// A missing base URL falls back to [`DEFAULT_BASE_URL`]. A missing secret
    /// key becomes an empty key and is only reported through a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let secret_key = lookup(SECRET_KEY_VAR).unwrap_or_else(|| {
            tracing::warn!("{} is not set, requests will be unauthorized", SECRET_KEY_VAR);
            String::new()
        });
        Self::new(base_url, secret_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL and an endpoint path with exactly one `/`.
    ///
    /// Trailing slashes on `path` are kept, some Paystack routes need them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                AUTHORIZATION,
                format!("Bearer {}", self.secret_key.expose_secret()),
            ),
            (CONTENT_TYPE, APPLICATION_JSON.to_string()),
        ]
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, String::new())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
