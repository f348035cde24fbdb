use std::sync::Arc;

use http::Method;
use serde_json::Value;
use smallvec::SmallVec;

use crate::ids::RequestId;

/// Maximum inline headers before heap allocation
/// Most requests have ≤16 headers (JSF: no heap in hot path)
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage shared by requests and responses
///
/// Header names use `Arc<str>` because they repeat across requests
/// (`Origin`, `Content-Type`, ...) and `Arc::clone()` is an atomic increment.
/// Values are per-request data and stay `String`.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Request data seen by the CORS filter and the handlers it wraps
///
/// The filter only reads [`HandlerRequest::method`] and three headers
/// (`Origin`, `Access-Control-Request-Method`, `Access-Control-Request-Headers`).
/// The remaining fields exist so wrapped handlers receive the full request.
#[derive(Debug, Clone)]
pub struct HandlerRequest {
    /// Unique request ID for tracing and correlation
    pub request_id: RequestId,
    /// HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Request path
    pub path: String,
    /// HTTP headers (stack-allocated for ≤16 headers)
    pub headers: HeaderVec,
    /// Request body parsed as JSON (if present)
    pub body: Option<Value>,
}

impl HandlerRequest {
    /// Create a request with no headers and no body
    #[must_use]
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            request_id: RequestId::new(),
            method,
            path: path.to_string(),
            headers: HeaderVec::new(),
            body: None,
        }
    }

    /// Append a header, builder style
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((Arc::from(name), value.to_string()));
        self
    }

    /// Attach a JSON body, builder style
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Get a header by name (case-insensitive per RFC 7230)
    ///
    /// When a header is repeated the first occurrence wins.
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get a header by name, treating a missing header as the empty string
    #[inline]
    #[must_use]
    pub fn header_or_empty(&self, name: &str) -> &str {
        self.get_header(name).unwrap_or("")
    }
}
