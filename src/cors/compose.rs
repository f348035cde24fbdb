//! Preflight and actual-request header composition.
//!
//! Both composers first compute the full header set as a [`CorsHeaders`]
//! list and only then write it, so a rejection at any checkpoint leaves the
//! response untouched.

use std::fmt;

use http::header::{
    HeaderName, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS, ACCESS_CONTROL_MAX_AGE,
    ACCESS_CONTROL_REQUEST_HEADERS, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::matcher::parse_header_list;
use super::{Cors, CorsPolicy, RequestKind};
use crate::server::{HandlerRequest, HandlerResponse};

/// CORS response headers in emission order
///
/// At most five headers are ever written, so this never spills to the heap.
pub type CorsHeaders = SmallVec<[(HeaderName, String); 5]>;

/// Checkpoints of the single-shot preflight evaluation
///
/// A rejection records the last checkpoint that passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreflightStage {
    Start,
    OriginChecked,
    MethodChecked,
    HeadersChecked,
    HeadersWritten,
}

/// Why no CORS headers were written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Preflight composer called for a non-`OPTIONS` request or vice versa
    WrongKind,
    /// No `Origin` header: not a CORS request
    MissingOrigin,
    OriginNotAllowed,
    MethodNotAllowed,
    HeadersNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rejection::WrongKind => "wrong request kind",
            Rejection::MissingOrigin => "missing origin",
            Rejection::OriginNotAllowed => "origin not allowed",
            Rejection::MethodNotAllowed => "method not allowed",
            Rejection::HeadersNotAllowed => "headers not allowed",
        };
        f.write_str(s)
    }
}

/// Outcome of running the filter on one request
///
/// Purely informational: rejected requests are not failed, they simply get no
/// CORS headers and the browser enforces the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CorsDecision {
    PreflightAccepted,
    ActualAccepted,
    Rejected { kind: RequestKind, reason: Rejection },
}

impl CorsDecision {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, CorsDecision::Rejected { .. })
    }
}

/// A decision together with the headers it produces, without a response sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsEvaluation {
    pub kind: RequestKind,
    pub decision: CorsDecision,
    pub headers: CorsHeaders,
}

impl CorsPolicy {
    /// Compute the preflight headers for `req`, or the checkpoint it failed
    pub(crate) fn preflight_headers(
        &self,
        req: &HandlerRequest,
    ) -> Result<CorsHeaders, (PreflightStage, Rejection)> {
        let mut stage = PreflightStage::Start;

        if !RequestKind::from_method(&req.method).is_preflight() {
            return Err((stage, Rejection::WrongKind));
        }
        let origin = req.header_or_empty(ORIGIN.as_str());
        if origin.is_empty() {
            return Err((stage, Rejection::MissingOrigin));
        }
        if !self.is_origin_allowed(origin) {
            return Err((stage, Rejection::OriginNotAllowed));
        }
        stage = PreflightStage::OriginChecked;

        let request_method = req.header_or_empty(ACCESS_CONTROL_REQUEST_METHOD.as_str());
        if !self.is_method_allowed(request_method) {
            return Err((stage, Rejection::MethodNotAllowed));
        }
        stage = PreflightStage::MethodChecked;

        let request_headers =
            parse_header_list(req.header_or_empty(ACCESS_CONTROL_REQUEST_HEADERS.as_str()));
        if !self.are_headers_allowed(&request_headers) {
            return Err((stage, Rejection::HeadersNotAllowed));
        }

        let mut headers = CorsHeaders::new();
        headers.push((ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()));
        // Echo the requested method rather than the whole allow-list
        headers.push((
            ACCESS_CONTROL_ALLOW_METHODS,
            request_method.to_uppercase(),
        ));
        if !request_headers.is_empty() {
            headers.push((
                ACCESS_CONTROL_ALLOW_HEADERS,
                request_headers.join(", "),
            ));
        }
        if self.allow_credentials() {
            headers.push((ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string()));
        }
        if self.max_age() > 0 {
            headers.push((ACCESS_CONTROL_MAX_AGE, self.max_age().to_string()));
        }
        Ok(headers)
    }

    /// Compute the actual-request headers for `req`
    pub(crate) fn actual_headers(&self, req: &HandlerRequest) -> Result<CorsHeaders, Rejection> {
        if RequestKind::from_method(&req.method).is_preflight() {
            return Err(Rejection::WrongKind);
        }
        let origin = req.header_or_empty(ORIGIN.as_str());
        if origin.is_empty() {
            return Err(Rejection::MissingOrigin);
        }
        if !self.is_origin_allowed(origin) {
            return Err(Rejection::OriginNotAllowed);
        }
        // Methods are enforced on simple requests too
        if !self.is_method_allowed(req.method.as_str()) {
            return Err(Rejection::MethodNotAllowed);
        }

        let mut headers = CorsHeaders::new();
        headers.push((ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()));
        if !self.exposed_headers().is_empty() {
            headers.push((
                ACCESS_CONTROL_EXPOSE_HEADERS,
                self.exposed_headers().join(", "),
            ));
        }
        if self.allow_credentials() {
            headers.push((ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string()));
        }
        Ok(headers)
    }
}

impl Cors {
    /// Handle a preflight (`OPTIONS`) request
    ///
    /// Writes the negotiation headers into `res` if every check passes,
    /// otherwise writes nothing. Never writes a body.
    pub fn handle_preflight(&self, req: &HandlerRequest, res: &mut HandlerResponse) -> CorsDecision {
        match self.policy().preflight_headers(req) {
            Ok(headers) => {
                write_headers(res, headers);
                trace!(
                    request_id = %req.request_id,
                    stage = ?PreflightStage::HeadersWritten,
                    "CORS preflight accepted"
                );
                CorsDecision::PreflightAccepted
            }
            Err((stage, reason)) => {
                debug!(
                    request_id = %req.request_id,
                    origin = req.header_or_empty(ORIGIN.as_str()),
                    request_method = req.header_or_empty(ACCESS_CONTROL_REQUEST_METHOD.as_str()),
                    request_headers = req.header_or_empty(ACCESS_CONTROL_REQUEST_HEADERS.as_str()),
                    stage = ?stage,
                    reason = %reason,
                    "CORS preflight rejected"
                );
                CorsDecision::Rejected {
                    kind: RequestKind::Preflight,
                    reason,
                }
            }
        }
    }

    /// Handle a simple or actual cross-origin request
    ///
    /// Writes `Access-Control-Allow-Origin` (plus expose/credentials headers)
    /// when the origin and method are allowed. Never blocks the request.
    pub fn handle_actual_request(
        &self,
        req: &HandlerRequest,
        res: &mut HandlerResponse,
    ) -> CorsDecision {
        match self.policy().actual_headers(req) {
            Ok(headers) => {
                write_headers(res, headers);
                trace!(request_id = %req.request_id, method = %req.method, "CORS request accepted");
                CorsDecision::ActualAccepted
            }
            Err(reason) => {
                debug!(
                    request_id = %req.request_id,
                    origin = req.header_or_empty(ORIGIN.as_str()),
                    method = %req.method,
                    reason = %reason,
                    "CORS request rejected"
                );
                CorsDecision::Rejected {
                    kind: RequestKind::Actual,
                    reason,
                }
            }
        }
    }

    /// Evaluate `req` without a response sink
    ///
    /// Returns the same decision and headers the handler entry points would
    /// produce. Useful for diagnostics and tests.
    #[must_use]
    pub fn evaluate(&self, req: &HandlerRequest) -> CorsEvaluation {
        let kind = RequestKind::from_method(&req.method);
        let result = match kind {
            RequestKind::Preflight => self
                .policy()
                .preflight_headers(req)
                .map(|h| (CorsDecision::PreflightAccepted, h))
                .map_err(|(_, reason)| reason),
            RequestKind::Actual => self
                .policy()
                .actual_headers(req)
                .map(|h| (CorsDecision::ActualAccepted, h)),
        };
        let (decision, headers) = match result {
            Ok(accepted) => accepted,
            Err(reason) => (CorsDecision::Rejected { kind, reason }, CorsHeaders::new()),
        };
        CorsEvaluation {
            kind,
            decision,
            headers,
        }
    }
}

fn write_headers(res: &mut HandlerResponse, headers: CorsHeaders) {
    for (name, value) in headers {
        res.set_header(name.as_str(), value);
    }
}
