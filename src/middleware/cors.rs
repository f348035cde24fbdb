use std::time::Duration;

use http::Method;

use super::Middleware;
use crate::cors::{Cors, CorsOptions};
use crate::server::{HandlerRequest, HandlerResponse};

/// CORS filter exposed through the [`Middleware`] hooks
///
/// # CORS Flow
///
/// 1. **Preflight (OPTIONS)**: `before()` answers with an empty `200`,
///    carrying the negotiation headers when the preflight is allowed and no
///    headers when it is not. The handler is never invoked.
/// 2. **Actual Request**: `before()` lets the request through; `after()`
///    adds `Access-Control-Allow-Origin` (and expose/credentials headers) to
///    the handler's response when origin and method are allowed.
#[derive(Debug, Clone, Default)]
pub struct CorsMiddleware {
    cors: Cors,
}

impl CorsMiddleware {
    /// Create middleware from raw options
    #[must_use]
    pub fn new(options: CorsOptions) -> Self {
        Self {
            cors: Cors::new(options),
        }
    }

    /// The underlying filter
    pub fn cors(&self) -> &Cors {
        &self.cors
    }
}

impl From<Cors> for CorsMiddleware {
    fn from(cors: Cors) -> Self {
        Self { cors }
    }
}

impl Middleware for CorsMiddleware {
    fn before(&self, req: &HandlerRequest) -> Option<HandlerResponse> {
        if req.method != Method::OPTIONS {
            return None;
        }
        let mut res = HandlerResponse::default();
        // Rejected preflights still short-circuit, just without headers
        let _decision = self.cors.handle_preflight(req, &mut res);
        Some(res)
    }

    fn after(&self, req: &HandlerRequest, res: &mut HandlerResponse, _latency: Duration) {
        if req.method == Method::OPTIONS {
            return;
        }
        let _decision = self.cors.handle_actual_request(req, res);
    }
}
