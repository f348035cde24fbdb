//! Request/response model the CORS filter operates on.
//!
//! The host HTTP server (may_minihttp, hyper, ...) is responsible for turning
//! its wire types into a [`HandlerRequest`] and for writing a
//! [`HandlerResponse`] back out. The filter itself never touches the wire.

mod handler;
mod request;
mod response;

pub use handler::Handler;
pub use request::{HandlerRequest, HeaderVec, MAX_INLINE_HEADERS};
pub use response::HandlerResponse;
