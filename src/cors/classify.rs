use std::fmt;

use http::Method;
use serde::Serialize;

/// How the filter treats a request, decided from the method alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// `OPTIONS`: a browser asking permission before the real call
    Preflight,
    /// Anything else, possibly cross-origin
    Actual,
}

impl RequestKind {
    /// Classify a request by method
    ///
    /// Method names are case-sensitive in HTTP: `options` parses as an
    /// extension method and is classified [`RequestKind::Actual`].
    #[inline]
    #[must_use]
    pub fn from_method(method: &Method) -> Self {
        if *method == Method::OPTIONS {
            RequestKind::Preflight
        } else {
            RequestKind::Actual
        }
    }

    #[must_use]
    pub fn is_preflight(self) -> bool {
        self == RequestKind::Preflight
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Preflight => f.write_str("preflight"),
            RequestKind::Actual => f.write_str("actual"),
        }
    }
}
