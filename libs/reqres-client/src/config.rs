use std::fmt;
use std::time::Duration;

use reqwest::Url;
use secrecy::Secret;

use crate::ReqresError;

const REQRES_BASE_URL: &str = "REQRES_BASE_URL";
const REQRES_API_KEY: &str = "REQRES_API_KEY";
const REQRES_TIMEOUT_SECS: &str = "REQRES_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://reqres.in";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USERS_PATH: &str = "/api/users";
const REGISTER_PATH: &str = "/api/register";
const LOGIN_PATH: &str = "/api/login";

pub struct ReqresConfig {
    pub base_url: String,
    /// Sent as `x-api-key` when present
    pub api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl Default for ReqresConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ReqresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqresConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ReqresConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var(REQRES_BASE_URL)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var(REQRES_API_KEY)
            .ok()
            .filter(|v| !v.is_empty())
            .map(Secret::new);
        let timeout_secs: u64 = std::env::var(REQRES_TIMEOUT_SECS)
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL must be absolute http(s)
    pub fn validate(&self) -> Result<(), ReqresError> {
        let url = Url::parse(&self.base_url).map_err(|e| ReqresError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ReqresError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{other}'"),
            }),
        }
    }

    fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.root(), USERS_PATH)
    }

    pub fn user_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.root(), USERS_PATH, urlencoding::encode(id))
    }

    pub fn register_url(&self) -> String {
        format!("{}{}", self.root(), REGISTER_PATH)
    }

    pub fn login_url(&self) -> String {
        format!("{}{}", self.root(), LOGIN_PATH)
    }
}
