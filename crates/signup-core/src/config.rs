//! Signup configuration.
//!
//! Loads settings from environment variables. The endpoint is optional:
//! an unset endpoint is handled by the submitter, not rejected here.

/// Primary endpoint variable.
pub const ENV_API_URL: &str = "SIGNUP_API_URL";
/// Build-time name used by the landing page bundle. Read as a fallback.
pub const ENV_API_URL_LEGACY: &str = "VITE_API_URL";
/// Log filter used when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "SIGNUP_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Resolved signup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfig {
    /// Where signups are posted. `None` when not configured.
    pub endpoint: Option<String>,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SignupConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SIGNUP_API_URL` — signup endpoint
    /// - `VITE_API_URL` — fallback when `SIGNUP_API_URL` is unset or empty
    /// - `SIGNUP_LOG_LEVEL` — log filter (default: `warn`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = normalize_endpoint(first_non_empty(&[
            &lookup(ENV_API_URL).unwrap_or_default(),
            &lookup(ENV_API_URL_LEGACY).unwrap_or_default(),
        ]));

        let log_level = first_non_empty(&[
            &lookup(ENV_LOG_LEVEL).unwrap_or_default(),
            DEFAULT_LOG_LEVEL,
        ]);

        Self {
            endpoint,
            log_level,
        }
    }

    /// Override the endpoint. `None` or `""` keeps the resolved one, so an
    /// empty `SIGNUP_API_URL` still falls back to `VITE_API_URL`.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.and_then(normalize_endpoint) {
            self.endpoint = Some(endpoint);
        }
        self
    }
}

fn normalize_endpoint(endpoint: String) -> Option<String> {
    if endpoint.is_empty() {
        None
    } else {
        Some(endpoint)
    }
}

fn first_non_empty(vals: &[&str]) -> String {
    for v in vals {
        if !v.is_empty() {
            return (*v).to_owned();
        }
    }
    String::new()
}
