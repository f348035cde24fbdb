use std::fmt;

/// CORS configuration error
///
/// Policy construction itself never fails; this error only surfaces while
/// reading options from files or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfigError {
    /// The configuration file could not be read
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error message
        message: String,
    },
    /// The configuration document is not valid YAML/JSON for `CorsOptions`
    Parse {
        /// `"yaml"` or `"json"`
        format: &'static str,
        /// Parser error message
        message: String,
    },
    /// An environment variable holds a value that cannot be parsed
    InvalidEnv {
        /// Variable name (e.g. `BRRTR_CORS_MAX_AGE`)
        name: String,
        /// The offending value
        value: String,
    },
}

impl fmt::Display for CorsConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorsConfigError::Io { path, message } => {
                write!(
                    f,
                    "CORS configuration error: cannot read '{}': {}",
                    path, message
                )
            }
            CorsConfigError::Parse { format, message } => {
                write!(
                    f,
                    "CORS configuration error: invalid {} document: {}",
                    format, message
                )
            }
            CorsConfigError::InvalidEnv { name, value } => {
                write!(
                    f,
                    "CORS configuration error: environment variable {}='{}' cannot be parsed",
                    name, value
                )
            }
        }
    }
}

impl std::error::Error for CorsConfigError {}
