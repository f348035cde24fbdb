#![allow(dead_code)]

use brrtcors::server::{HandlerRequest, HandlerResponse};
use brrtcors::{Cors, CorsOptions};
use http::Method;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";

/// Filter with the given origin and method allow-lists, everything else default
pub fn cors_for(origins: &[&str], methods: &[&str]) -> Cors {
    Cors::new(CorsOptions {
        allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
        allowed_methods: methods.iter().map(|s| s.to_string()).collect(),
        ..CorsOptions::default()
    })
}

pub fn preflight(origin: &str, request_method: &str) -> HandlerRequest {
    HandlerRequest::new(Method::OPTIONS, "/resource")
        .with_header("Origin", origin)
        .with_header("Access-Control-Request-Method", request_method)
}

pub fn actual(method: Method, origin: &str) -> HandlerRequest {
    HandlerRequest::new(method, "/resource").with_header("Origin", origin)
}

/// All `access-control-*` headers on a response, in write order
pub fn cors_headers(res: &HandlerResponse) -> Vec<(String, String)> {
    res.headers
        .iter()
        .filter(|(k, _)| k.to_ascii_lowercase().starts_with("access-control-"))
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
