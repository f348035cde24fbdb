use serde::Serialize;

use super::CorsOptions;

/// Sentinel origin that matches every non-empty `Origin`
pub const ANY_ORIGIN: &str = "*";

/// Methods allowed when the caller configures none
pub const DEFAULT_METHODS: [&str; 2] = ["GET", "POST"];

/// Header always present in the allow-list; some browsers request it at preflight
const ALWAYS_ALLOWED_HEADER: &str = "Origin";

/// Normalized, immutable CORS policy
///
/// Built once from [`CorsOptions`] and read concurrently by every request.
/// All normalization happens here so request-time matching is plain
/// comparison:
///
/// - origins are lowercased, empty list becomes `["*"]`
/// - methods are uppercased, empty list becomes `["GET", "POST"]`
/// - allowed headers get `Origin` appended, then every allowed and exposed
///   header is put in canonical form (`content-type` → `Content-Type`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
    allowed_methods: Vec<String>,
    allowed_headers: Vec<String>,
    exposed_headers: Vec<String>,
    allow_credentials: bool,
    max_age: i64,
}

impl CorsPolicy {
    /// Normalize raw options; never fails, any input falls back to defaults
    #[must_use]
    pub fn from_options(options: &CorsOptions) -> Self {
        let mut allowed_origins: Vec<String> = options
            .allowed_origins
            .iter()
            .map(|o| o.to_lowercase())
            .collect();
        if allowed_origins.is_empty() {
            allowed_origins.push(ANY_ORIGIN.to_string());
        }

        let mut allowed_methods: Vec<String> = options
            .allowed_methods
            .iter()
            .map(|m| m.to_uppercase())
            .collect();
        if allowed_methods.is_empty() {
            allowed_methods = DEFAULT_METHODS.iter().map(|m| m.to_string()).collect();
        }

        let allowed_headers = options
            .allowed_headers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(ALWAYS_ALLOWED_HEADER))
            .map(canonical_header_key)
            .collect();

        let exposed_headers = options
            .exposed_headers
            .iter()
            .map(|h| canonical_header_key(h))
            .collect();

        Self {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            exposed_headers,
            allow_credentials: options.allow_credentials,
            max_age: options.max_age,
        }
    }

    /// Clear the method allow-list, rejecting every method including `OPTIONS`
    ///
    /// Empty configuration lists fall back to defaults, so a zero-method
    /// lockdown has to be requested explicitly.
    #[must_use]
    pub fn lock_methods(mut self) -> Self {
        self.allowed_methods.clear();
        self
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn allowed_methods(&self) -> &[String] {
        &self.allowed_methods
    }

    pub fn allowed_headers(&self) -> &[String] {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.exposed_headers
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn max_age(&self) -> i64 {
        self.max_age
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::from_options(&CorsOptions::default())
    }
}

/// Canonical MIME header form of `name`
///
/// Uppercases the first letter and every letter following a hyphen,
/// lowercases the rest. A name containing any byte that is not an HTTP token
/// character is returned unchanged.
///
/// ```rust
/// use brrtcors::cors::canonical_header_key;
///
/// assert_eq!(canonical_header_key("content-type"), "Content-Type");
/// assert_eq!(canonical_header_key("X-REQUEST-ID"), "X-Request-Id");
/// assert_eq!(canonical_header_key("bad header"), "bad header");
/// ```
#[must_use]
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_string();
    }
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

// RFC 7230 tchar
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}
