use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::HeaderVec;

const CORS_PREFIX: &str = "access-control-";

/// Response sink the filter writes CORS headers into
///
/// Handlers fill in status and body; the CORS filter only ever calls
/// [`HandlerResponse::set_header`].
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    /// HTTP status code (200, 404, 500, etc.)
    pub status: u16,
    /// HTTP response headers (stack-allocated for ≤16 headers)
    #[serde(skip_serializing)]
    pub headers: HeaderVec,
    /// Response body as JSON
    pub body: Value,
}

impl Default for HandlerResponse {
    /// An empty `200` response, what a host server sends when nothing writes a body
    fn default() -> Self {
        Self::new(200, HeaderVec::new(), Value::Null)
    }
}

impl HandlerResponse {
    /// Create a new response with the given status, headers, and body
    #[must_use]
    pub fn new(status: u16, headers: HeaderVec, body: Value) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a JSON response with default headers
    #[must_use]
    pub fn json(status: u16, body: Value) -> Self {
        let mut headers = HeaderVec::new();
        headers.push((Arc::from("content-type"), "application/json".to_string()));
        Self {
            status,
            headers,
            body,
        }
    }

    /// Get a header by name
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Add or update a header
    pub fn set_header(&mut self, name: &str, value: String) {
        // Remove existing header with same name (case-insensitive)
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value));
    }

    /// True if any `Access-Control-*` header has been written
    #[must_use]
    pub fn has_cors_headers(&self) -> bool {
        self.headers
            .iter()
            .any(|(k, _)| {
                k.len() > CORS_PREFIX.len()
                    && k.get(..CORS_PREFIX.len())
                        .is_some_and(|p| p.eq_ignore_ascii_case(CORS_PREFIX))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut res = HandlerResponse::default();
        res.set_header("Access-Control-Allow-Origin", "a".to_string());
        res.set_header("access-control-allow-origin", "b".to_string());
        assert_eq!(res.headers.len(), 1);
        assert_eq!(res.get_header("ACCESS-CONTROL-ALLOW-ORIGIN"), Some("b"));
    }

    #[test]
    fn test_default_is_empty_ok() {
        let res = HandlerResponse::default();
        assert_eq!(res.status, 200);
        assert!(res.headers.is_empty());
        assert_eq!(res.body, Value::Null);
        assert!(!res.has_cors_headers());
    }

    #[test]
    fn test_json_sets_content_type() {
        let res = HandlerResponse::json(201, serde_json::json!({"ok": true}));
        assert_eq!(res.get_header("Content-Type"), Some("application/json"));
        assert!(!res.has_cors_headers());
    }
}
