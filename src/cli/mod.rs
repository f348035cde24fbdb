//! # CLI Module
//!
//! Command-line diagnostics for CORS policies, shipped as the `brrtcors`
//! binary.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Evaluate one request against a policy and print the decision and the
//! headers the filter would write:
//!
//! ```bash
//! brrtcors check --config config/config.yaml \
//!     -X OPTIONS --origin https://app.example.com \
//!     --request-method POST --request-headers "Content-Type, X-Request-Id"
//! ```
//!
//! ```text
//! kind: preflight
//! decision: accepted
//! access-control-allow-origin: https://app.example.com
//! access-control-allow-methods: POST
//! access-control-allow-headers: Content-Type, X-Request-Id
//! ```
//!
//! Add `--json` for machine-readable output.
//!
//! ### `show`
//!
//! Print the normalized policy (defaults applied, case normalized):
//!
//! ```bash
//! brrtcors show --config config/config.yaml
//! ```
//!
//! Both commands apply `BRRTR_CORS_*` environment overrides after the file
//! unless `--no-env` is given.

mod commands;


pub use commands::{load_options, run, run_cli, Cli, Commands};
