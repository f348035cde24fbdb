//! # Runtime Configuration Module
//!
//! Environment variable overrides for the CORS policy, applied on top of
//! whatever a config file provided.
//!
//! ## Environment Variables
//!
//! | Variable | Format | Overrides |
//! |---|---|---|
//! | `BRRTR_CORS_ALLOWED_ORIGINS` | comma-separated list | `allowedOrigins` |
//! | `BRRTR_CORS_ALLOWED_METHODS` | comma-separated list | `allowedMethods` |
//! | `BRRTR_CORS_ALLOWED_HEADERS` | comma-separated list | `allowedHeaders` |
//! | `BRRTR_CORS_EXPOSED_HEADERS` | comma-separated list | `exposedHeaders` |
//! | `BRRTR_CORS_ALLOW_CREDENTIALS` | `true`/`false`/`1`/`0` | `allowCredentials` |
//! | `BRRTR_CORS_MAX_AGE` | integer seconds | `maxAge` |
//!
//! Unset variables leave the option alone. A list variable set to the empty
//! string clears the list, which then falls back to its default during
//! normalization.
//!
//! ## Usage
//!
//! ```rust
//! use brrtcors::runtime_config::CorsEnvConfig;
//! use brrtcors::CorsOptions;
//!
//! let env = CorsEnvConfig::from_lookup(|name| match name {
//!     "BRRTR_CORS_ALLOWED_ORIGINS" => Some("https://a.test, https://b.test".to_string()),
//!     "BRRTR_CORS_MAX_AGE" => Some("600".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! let options = env.apply(CorsOptions::default());
//! assert_eq!(options.allowed_origins, ["https://a.test", "https://b.test"]);
//! assert_eq!(options.max_age, 600);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! export BRRTR_CORS_ALLOWED_ORIGINS=https://app.example.com
//! export BRRTR_CORS_ALLOW_CREDENTIALS=true
//! export BRRTR_CORS_MAX_AGE=600
//! brrtcors show --config config/config.yaml
//! ```

use std::env;

use crate::cors::{CorsConfigError, CorsOptions};

pub const ENV_ALLOWED_ORIGINS: &str = "BRRTR_CORS_ALLOWED_ORIGINS";
pub const ENV_ALLOWED_METHODS: &str = "BRRTR_CORS_ALLOWED_METHODS";
pub const ENV_ALLOWED_HEADERS: &str = "BRRTR_CORS_ALLOWED_HEADERS";
pub const ENV_EXPOSED_HEADERS: &str = "BRRTR_CORS_EXPOSED_HEADERS";
pub const ENV_ALLOW_CREDENTIALS: &str = "BRRTR_CORS_ALLOW_CREDENTIALS";
pub const ENV_MAX_AGE: &str = "BRRTR_CORS_MAX_AGE";

/// CORS overrides loaded from environment variables.
///
/// Load this at startup using [`CorsEnvConfig::from_env()`] and fold it into
/// the file configuration with [`CorsEnvConfig::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsEnvConfig {
    pub allowed_origins: Option<Vec<String>>,
    pub allowed_methods: Option<Vec<String>>,
    pub allowed_headers: Option<Vec<String>>,
    pub exposed_headers: Option<Vec<String>>,
    pub allow_credentials: Option<bool>,
    pub max_age: Option<i64>,
}

impl CorsEnvConfig {
    /// Load overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CorsConfigError::InvalidEnv`] if a boolean or integer
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, CorsConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load overrides through an arbitrary lookup function.
    ///
    /// # Errors
    ///
    /// Same as [`CorsEnvConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CorsConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allow_credentials = match lookup(ENV_ALLOW_CREDENTIALS) {
            Some(value) => Some(parse_bool(ENV_ALLOW_CREDENTIALS, &value)?),
            None => None,
        };
        let max_age = match lookup(ENV_MAX_AGE) {
            Some(value) => Some(value.trim().parse::<i64>().map_err(|_| {
                CorsConfigError::InvalidEnv {
                    name: ENV_MAX_AGE.to_string(),
                    value: value.clone(),
                }
            })?),
            None => None,
        };
        Ok(Self {
            allowed_origins: lookup(ENV_ALLOWED_ORIGINS).map(|v| split_list(&v)),
            allowed_methods: lookup(ENV_ALLOWED_METHODS).map(|v| split_list(&v)),
            allowed_headers: lookup(ENV_ALLOWED_HEADERS).map(|v| split_list(&v)),
            exposed_headers: lookup(ENV_EXPOSED_HEADERS).map(|v| split_list(&v)),
            allow_credentials,
            max_age,
        })
    }

    /// True if no variable was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace every option that has an override.
    #[must_use]
    pub fn apply(&self, mut options: CorsOptions) -> CorsOptions {
        if let Some(origins) = &self.allowed_origins {
            options.allowed_origins = origins.clone();
        }
        if let Some(methods) = &self.allowed_methods {
            options.allowed_methods = methods.clone();
        }
        if let Some(headers) = &self.allowed_headers {
            options.allowed_headers = headers.clone();
        }
        if let Some(headers) = &self.exposed_headers {
            options.exposed_headers = headers.clone();
        }
        if let Some(allow) = self.allow_credentials {
            options.allow_credentials = allow;
        }
        if let Some(max_age) = self.max_age {
            options.max_age = max_age;
        }
        options
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(name: &str, value: &str) -> Result<bool, CorsConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CorsConfigError::InvalidEnv {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
