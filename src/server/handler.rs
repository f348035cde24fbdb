use super::{HandlerRequest, HandlerResponse};

/// A request-handling unit the CORS filter can wrap
///
/// The handler writes its status, headers and body into the response it is
/// given. Any closure `Fn(&HandlerRequest, &mut HandlerResponse)` that is
/// `Send + Sync` is a handler.
///
/// # Example
///
/// ```rust
/// use brrtcors::server::{Handler, HandlerRequest, HandlerResponse};
///
/// let hello = |_req: &HandlerRequest, res: &mut HandlerResponse| {
///     res.body = serde_json::json!({ "hello": "world" });
/// };
/// let mut res = HandlerResponse::default();
/// hello.handle(&HandlerRequest::new(http::Method::GET, "/"), &mut res);
/// assert_eq!(res.body["hello"], "world");
/// ```
pub trait Handler: Send + Sync {
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse);
}

impl<F> Handler for F
where
    F: Fn(&HandlerRequest, &mut HandlerResponse) + Send + Sync,
{
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse) {
        self(req, res)
    }
}
