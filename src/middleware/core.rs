use std::time::Duration;

use crate::server::{HandlerRequest, HandlerResponse};

/// Hooks run around a handler by a middleware chain
///
/// `before` may short-circuit the request by returning a response; the
/// handler is then skipped. `after` sees the handler's response (mutable)
/// and the time the handler took.
pub trait Middleware: Send + Sync {
    fn before(&self, _req: &HandlerRequest) -> Option<HandlerResponse> {
        None
    }
    fn after(&self, _req: &HandlerRequest, _res: &mut HandlerResponse, _latency: Duration) {}
}
