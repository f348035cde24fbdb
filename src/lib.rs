//! # brrtcors
//!
//! **brrtcors** is a Cross-Origin Resource Sharing (CORS) enforcement filter
//! for Rust HTTP services. It sits in front of a request handler, answers
//! browser preflight requests and annotates actual cross-origin responses
//! with the `Access-Control-*` headers a policy allows.
//!
//! ## Overview
//!
//! A policy is configured once (from code, a YAML/JSON file or environment
//! variables), normalized into an immutable [`CorsPolicy`] and then shared by
//! every request. The filter never fails a request: a disallowed request
//! simply gets no CORS headers and the browser blocks the response.
//!
//! ## Architecture
//!
//! - **[`cors`]** - options, policy normalization, matching, header
//!   composition and the handler adapters
//! - **[`server`]** - the request/response types the filter reads and writes
//!   and the [`server::Handler`] trait it wraps
//! - **[`middleware`]** - [`middleware::CorsMiddleware`] for before/after
//!   middleware chains
//! - **[`runtime_config`]** - `BRRTR_CORS_*` environment overrides
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `brrtcors` diagnostics binary
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Browser
//!     participant Cors as Cors::process
//!     participant Handler
//!
//!     Browser->>Cors: OPTIONS /users (Origin, Access-Control-Request-Method)
//!     Cors->>Cors: origin? method? headers?
//!     Cors-->>Browser: 200 + Allow-Origin/Methods/Headers/Max-Age
//!
//!     Browser->>Cors: POST /users (Origin)
//!     Cors->>Cors: origin allowed?
//!     Cors->>Cors: Allow-Origin, Expose-Headers, Allow-Credentials
//!     Cors->>Handler: handle(req, res)
//!     Handler-->>Browser: response + CORS headers
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use brrtcors::server::{HandlerRequest, HandlerResponse};
//! use brrtcors::Cors;
//! use http::Method;
//!
//! let cors = Cors::builder()
//!     .allowed_origins(&["https://app.example.com"])
//!     .allowed_methods(&["GET", "PUT"])
//!     .allow_credentials(true)
//!     .build();
//!
//! let handler = cors.wrap(|_req: &HandlerRequest, res: &mut HandlerResponse| {
//!     res.body = serde_json::json!({"ok": true});
//! });
//!
//! let req = HandlerRequest::new(Method::GET, "/items")
//!     .with_header("Origin", "https://app.example.com");
//! let mut res = HandlerResponse::default();
//! handler.serve(&req, &mut res);
//!
//! assert_eq!(
//!     res.get_header("Access-Control-Allow-Origin"),
//!     Some("https://app.example.com")
//! );
//! assert_eq!(res.get_header("Access-Control-Allow-Credentials"), Some("true"));
//! ```
//!
//! ## Configuration
//!
//! ```yaml
//! cors:
//!   allowedOrigins: ["https://app.example.com"]
//!   allowedMethods: [GET, POST, PUT]
//!   allowedHeaders: [Content-Type, Authorization]
//!   exposedHeaders: [X-Total-Count]
//!   allowCredentials: true
//!   maxAge: 600
//! ```
//!
//! Load it with [`CorsOptions::from_file`] and apply
//! [`runtime_config::CorsEnvConfig`] on top.

pub mod cli;
pub mod cors;
pub mod ids;
pub mod logging;
pub mod middleware;
pub mod runtime_config;
pub mod server;

pub use cors::{
    Cors, CorsBuilder, CorsConfigError, CorsDecision, CorsEvaluation, CorsHandler, CorsOptions,
    CorsPolicy, Next, Rejection, RequestKind,
};
