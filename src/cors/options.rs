use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CorsConfigError;

/// Raw, caller-supplied CORS configuration
///
/// Nothing here is normalized: origins may be mixed case, methods lowercase,
/// header names in any capitalization. [`CorsPolicy::from_options`] turns it
/// into the canonical form used at request time, applying defaults for empty
/// lists.
///
/// Deserializes from camelCase keys, so a `config.yaml` section reads:
///
/// ```yaml
/// cors:
///   allowedOrigins: ["https://app.example.com"]
///   allowedMethods: ["GET", "POST", "DELETE"]
///   allowedHeaders: ["Content-Type", "X-Request-Id"]
///   exposedHeaders: ["X-Total-Count"]
///   allowCredentials: true
///   maxAge: 600
/// ```
///
/// [`CorsPolicy::from_options`]: super::CorsPolicy::from_options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CorsOptions {
    /// Origins a cross-domain request can be executed from.
    /// `"*"` allows every origin. Default `["*"]`.
    pub allowed_origins: Vec<String>,
    /// Methods the client may use cross-domain. Default `["GET", "POST"]`.
    pub allowed_methods: Vec<String>,
    /// Non-simple headers the client may send. `Origin` is always added.
    pub allowed_headers: Vec<String>,
    /// Response headers scripts may read on actual requests.
    pub exposed_headers: Vec<String>,
    /// Whether cookies, HTTP auth or client certificates may be sent.
    pub allow_credentials: bool,
    /// How long (seconds) a preflight result may be cached; `<= 0` disables.
    pub max_age: i64,
}

impl CorsOptions {
    /// Parse options from a YAML document
    ///
    /// The options may sit at the top level or under a `cors:` key, so the
    /// same `config.yaml` that configures the rest of a service can be used.
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CorsConfigError::Parse`] if the document is not valid YAML or
    /// contains unknown keys.
    pub fn from_yaml_str(source: &str) -> Result<Self, CorsConfigError> {
        let doc: serde_yaml::Value = serde_yaml::from_str(source).map_err(yaml_error)?;
        let section = match doc.get("cors") {
            Some(section) => section.clone(),
            None => doc,
        };
        if section.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(section).map_err(yaml_error)
    }

    /// Parse options from a JSON document (top level or under `"cors"`)
    ///
    /// # Errors
    ///
    /// Returns [`CorsConfigError::Parse`] if the document is not valid JSON or
    /// contains unknown keys.
    pub fn from_json_str(source: &str) -> Result<Self, CorsConfigError> {
        let doc: serde_json::Value = serde_json::from_str(source).map_err(json_error)?;
        let section = match doc.get("cors") {
            Some(section) => section.clone(),
            None => doc,
        };
        if section.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(section).map_err(json_error)
    }

    /// Load options from a file
    ///
    /// `.json` files are parsed as JSON, everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`CorsConfigError::Io`] if the file cannot be read and
    /// [`CorsConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CorsConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CorsConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }
}

fn yaml_error(e: serde_yaml::Error) -> CorsConfigError {
    CorsConfigError::Parse {
        format: "yaml",
        message: e.to_string(),
    }
}

fn json_error(e: serde_json::Error) -> CorsConfigError {
    CorsConfigError::Parse {
        format: "json",
        message: e.to_string(),
    }
}
