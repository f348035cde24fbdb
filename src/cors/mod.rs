//! # CORS Module
//!
//! Cross-Origin Resource Sharing enforcement for request handlers, following
//! the W3C CORS model: decide per request whether to emit the
//! `Access-Control-*` headers, and let the browser enforce the outcome.
//!
//! ## Request Flow
//!
//! ```mermaid
//! flowchart TD
//!     R[Request] --> K{method == OPTIONS?}
//!     K -- yes --> PO{Origin allowed?}
//!     PO -- no --> X[no headers, handler not called]
//!     PO -- yes --> PM{Access-Control-Request-Method allowed?}
//!     PM -- no --> X
//!     PM -- yes --> PH{Access-Control-Request-Headers allowed?}
//!     PH -- no --> X
//!     PH -- yes --> PW[write Allow-Origin / Allow-Methods /<br/>Allow-Headers / Allow-Credentials / Max-Age]
//!     K -- no --> AO{Origin and method allowed?}
//!     AO -- yes --> AW[write Allow-Origin / Expose-Headers /<br/>Allow-Credentials]
//!     AO -- no --> N[no headers]
//!     AW --> H[wrapped handler]
//!     N --> H
//! ```
//!
//! ## Matching Rules
//!
//! - **Origins** are compared case-insensitively; `"*"` matches any non-empty
//!   origin. The request origin is always echoed, never a literal `*`, so
//!   credentialed requests work with a wildcard policy.
//! - **Methods** are compared case-insensitively. `OPTIONS` always matches
//!   unless the allow-list is empty.
//! - **Headers** are compared exactly against the canonicalized allow-list
//!   (`x-foo` configured matches a requested `X-Foo`).
//!
//! Nothing in this module returns an error at request time. A disallowed or
//! malformed request just gets no CORS headers.
//!
//! ## Usage
//!
//! ```rust
//! use brrtcors::{Cors, CorsOptions};
//! use brrtcors::server::{HandlerRequest, HandlerResponse};
//! use http::Method;
//!
//! let cors = Cors::new(CorsOptions {
//!     allowed_origins: vec!["foo.com".into()],
//!     allowed_methods: vec!["GET".into(), "POST".into()],
//!     ..CorsOptions::default()
//! });
//!
//! let req = HandlerRequest::new(Method::OPTIONS, "/pets")
//!     .with_header("Origin", "foo.com")
//!     .with_header("Access-Control-Request-Method", "POST");
//! let mut res = HandlerResponse::default();
//! cors.annotate(&req, &mut res);
//!
//! assert_eq!(res.get_header("Access-Control-Allow-Origin"), Some("foo.com"));
//! assert_eq!(res.get_header("Access-Control-Allow-Methods"), Some("POST"));
//! assert_eq!(res.get_header("Access-Control-Allow-Headers"), None);
//! ```

mod adapter;
mod builder;
mod classify;
mod compose;
mod error;
mod matcher;
mod options;
mod policy;

pub use adapter::{CorsHandler, Next};
pub use builder::CorsBuilder;
pub use classify::RequestKind;
pub use compose::{CorsDecision, CorsEvaluation, CorsHeaders, PreflightStage, Rejection};
pub use error::CorsConfigError;
pub use matcher::parse_header_list;
pub use options::CorsOptions;
pub use policy::{canonical_header_key, CorsPolicy, ANY_ORIGIN, DEFAULT_METHODS};

use std::sync::Arc;

/// The CORS filter
///
/// Holds an immutable [`CorsPolicy`] behind an `Arc`, so it is cheap to
/// clone and safe to share across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: Arc<CorsPolicy>,
}

impl Cors {
    /// Create a filter from raw options, normalizing them
    #[must_use]
    pub fn new(options: CorsOptions) -> Self {
        Self::from_policy(CorsPolicy::from_options(&options))
    }

    /// Create a filter from an already normalized policy
    #[must_use]
    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Start a [`CorsBuilder`]
    #[must_use]
    pub fn builder() -> CorsBuilder {
        CorsBuilder::new()
    }

    /// The normalized policy this filter enforces
    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }
}

impl Default for Cors {
    /// All origins, `GET` and `POST`, only the `Origin` header, no credentials,
    /// no preflight caching
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}
