//! Handler adapters: the three ways a host framework can run the filter.
//!
//! | Entry point | Continuation | Style |
//! |---|---|---|
//! | [`Cors::wrap`] → [`CorsHandler`] | wrapped [`Handler`] | `handler = cors.wrap(handler)` |
//! | [`Cors::serve_with_next`] | explicit callback | `(req, res, next)` chains |
//! | [`Cors::annotate`] | none, caller continues | headers-only |
//!
//! All three go through [`Cors::process`].

use super::{Cors, CorsDecision, RequestKind};
use crate::server::{Handler, HandlerRequest, HandlerResponse};

/// How the request continues after the CORS step
pub enum Next<'a> {
    /// Delegate to a wrapped handler
    Handler(&'a dyn Handler),
    /// Invoke an explicit continuation callback
    Callback(&'a mut dyn FnMut(&HandlerRequest, &mut HandlerResponse)),
    /// No continuation; the caller decides what happens next
    Stop,
}

impl Next<'_> {
    fn run(self, req: &HandlerRequest, res: &mut HandlerResponse) {
        match self {
            Next::Handler(handler) => handler.handle(req, res),
            Next::Callback(callback) => callback(req, res),
            Next::Stop => {}
        }
    }
}

impl Cors {
    /// Run the filter on one request
    ///
    /// Preflight requests are answered here and `next` is dropped unused.
    /// Every other request is annotated and then passed to `next`, whether or
    /// not the CORS checks passed.
    pub fn process(
        &self,
        req: &HandlerRequest,
        res: &mut HandlerResponse,
        next: Next<'_>,
    ) -> CorsDecision {
        match RequestKind::from_method(&req.method) {
            RequestKind::Preflight => self.handle_preflight(req, res),
            RequestKind::Actual => {
                let decision = self.handle_actual_request(req, res);
                next.run(req, res);
                decision
            }
        }
    }

    /// Wrap `handler` so the filter runs in front of it
    ///
    /// ```rust
    /// use brrtcors::{Cors, CorsOptions};
    /// use brrtcors::server::{Handler, HandlerRequest, HandlerResponse};
    /// use http::Method;
    ///
    /// let cors = Cors::new(CorsOptions {
    ///     allowed_origins: vec!["foo.com".into()],
    ///     ..CorsOptions::default()
    /// });
    /// let app = cors.wrap(|_req: &HandlerRequest, res: &mut HandlerResponse| {
    ///     res.body = serde_json::json!("hello");
    /// });
    ///
    /// let req = HandlerRequest::new(Method::GET, "/").with_header("Origin", "foo.com");
    /// let mut res = HandlerResponse::default();
    /// app.handle(&req, &mut res);
    /// assert_eq!(res.get_header("Access-Control-Allow-Origin"), Some("foo.com"));
    /// assert_eq!(res.body, "hello");
    /// ```
    #[must_use]
    pub fn wrap<H: Handler>(&self, handler: H) -> CorsHandler<H> {
        CorsHandler {
            cors: self.clone(),
            inner: handler,
        }
    }

    /// Run the filter with an explicit continuation callback
    ///
    /// `next` is invoked for every non-`OPTIONS` request and never for a
    /// preflight.
    pub fn serve_with_next<F>(
        &self,
        req: &HandlerRequest,
        res: &mut HandlerResponse,
        mut next: F,
    ) -> CorsDecision
    where
        F: FnMut(&HandlerRequest, &mut HandlerResponse),
    {
        self.process(req, res, Next::Callback(&mut next))
    }

    /// Write CORS headers only; the caller handles continuation
    pub fn annotate(&self, req: &HandlerRequest, res: &mut HandlerResponse) -> CorsDecision {
        self.process(req, res, Next::Stop)
    }
}

/// A [`Handler`] with the CORS filter in front of it, built by [`Cors::wrap`]
#[derive(Clone)]
pub struct CorsHandler<H> {
    cors: Cors,
    inner: H,
}

impl<H: Handler> CorsHandler<H> {
    /// The policy this handler enforces
    pub fn cors(&self) -> &Cors {
        &self.cors
    }

    /// The wrapped handler
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Run the filter and the wrapped handler, returning the CORS decision
    pub fn serve(&self, req: &HandlerRequest, res: &mut HandlerResponse) -> CorsDecision {
        self.cors.process(req, res, Next::Handler(&self.inner))
    }
}

impl<H: Handler> Handler for CorsHandler<H> {
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse) {
        // The decision is informational; headers are already written
        let _decision = self.serve(req, res);
    }
}
