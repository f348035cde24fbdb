//! Origin, method and header predicates over a [`CorsPolicy`].
//!
//! Each predicate is independent and pure; the composers chain them.

use http::Method;

use super::policy::ANY_ORIGIN;
use super::CorsPolicy;

impl CorsPolicy {
    /// Check if a given origin may perform cross-domain requests
    ///
    /// An empty origin is never allowed: no `Origin` header means the request
    /// is not a CORS request at all.
    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }
        let origin = origin.to_lowercase();
        self.allowed_origins()
            .iter()
            .any(|allowed| allowed == ANY_ORIGIN || *allowed == origin)
    }

    /// Check if a method can be used as part of a cross-domain request
    ///
    /// `OPTIONS` is always allowed so preflight probes pass, unless the
    /// allow-list is empty: a zero-method policy rejects everything.
    #[must_use]
    pub fn is_method_allowed(&self, method: &str) -> bool {
        let allowed_methods = self.allowed_methods();
        if allowed_methods.is_empty() {
            return false;
        }
        let method = method.to_uppercase();
        if method == Method::OPTIONS.as_str() {
            return true;
        }
        allowed_methods.iter().any(|allowed| *allowed == method)
    }

    /// Check if every requested header is in the allow-list
    ///
    /// Comparison is exact against the canonicalized allow-list. An empty
    /// request list is always allowed.
    #[must_use]
    pub fn are_headers_allowed<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        requested.iter().all(|header| {
            self.allowed_headers()
                .iter()
                .any(|allowed| allowed == header.as_ref())
        })
    }
}

/// Split an `Access-Control-Request-Headers` value into trimmed tokens
///
/// Empty tokens from malformed input (`"X-Foo,"`) are kept so they fail
/// matching. An empty or whitespace-only value yields no tokens.
#[must_use]
pub fn parse_header_list(value: &str) -> Vec<&str> {
    if value.trim().is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cors::CorsOptions;

    fn policy(origins: &[&str], methods: &[&str], headers: &[&str]) -> CorsPolicy {
        CorsPolicy::from_options(&CorsOptions {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            allowed_methods: methods.iter().map(|s| s.to_string()).collect(),
            allowed_headers: headers.iter().map(|s| s.to_string()).collect(),
            ..CorsOptions::default()
        })
    }

    #[test]
    fn test_wildcard_allows_any_non_empty_origin() {
        let p = policy(&["*"], &[], &[]);
        assert!(p.is_origin_allowed("http://anything.example"));
        assert!(p.is_origin_allowed("NULL"));
        assert!(!p.is_origin_allowed(""));
    }

    #[test]
    fn test_wildcard_anywhere_in_list() {
        let p = policy(&["foo.com", "*"], &[], &[]);
        assert!(p.is_origin_allowed("bar.com"));
    }

    #[test]
    fn test_exact_origin_is_case_insensitive() {
        let p = policy(&["Foo.com"], &[], &[]);
        assert!(p.is_origin_allowed("foo.com"));
        assert!(p.is_origin_allowed("FOO.COM"));
        assert!(!p.is_origin_allowed("bar.com"));
        assert!(!p.is_origin_allowed("foo.com.evil"));
        assert!(!p.is_origin_allowed("sub.foo.com"));
    }

    #[test]
    fn test_method_case_insensitive() {
        let p = policy(&[], &["get", "Delete"], &[]);
        assert!(p.is_method_allowed("GET"));
        assert!(p.is_method_allowed("delete"));
        assert!(!p.is_method_allowed("POST"));
        assert!(!p.is_method_allowed(""));
    }

    #[test]
    fn test_options_exempt_unless_locked() {
        let p = policy(&[], &["GET"], &[]);
        assert!(p.is_method_allowed("OPTIONS"));
        assert!(p.is_method_allowed("options"));
        let locked = p.lock_methods();
        assert!(!locked.is_method_allowed("OPTIONS"));
        assert!(!locked.is_method_allowed("GET"));
    }

    #[test]
    fn test_headers_against_canonical_list() {
        let p = policy(&[], &[], &["x-foo", "content-type"]);
        assert!(p.are_headers_allowed(&["X-Foo"]));
        assert!(p.are_headers_allowed(&["Content-Type", "X-Foo", "Origin"]));
        assert!(!p.are_headers_allowed(&["x-foo"]));
        assert!(!p.are_headers_allowed(&["X-Foo", "X-Bar"]));
        assert!(p.are_headers_allowed::<&str>(&[]));
    }

    #[test]
    fn test_parse_header_list() {
        assert_eq!(parse_header_list("X-Custom, Content-Type"), ["X-Custom", "Content-Type"]);
        assert_eq!(parse_header_list("  X-A ,X-B  "), ["X-A", "X-B"]);
        assert_eq!(parse_header_list("X-A,"), ["X-A", ""]);
        assert_eq!(parse_header_list(",,"), ["", "", ""]);
        assert!(parse_header_list("").is_empty());
        assert!(parse_header_list("   ").is_empty());
    }

    #[test]
    fn test_malformed_list_fails() {
        let p = policy(&[], &[], &["X-A"]);
        assert!(!p.are_headers_allowed(&parse_header_list("X-A,")));
    }
}
