use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use http::Method;
use serde_json::json;

use crate::cors::{Cors, CorsDecision, CorsEvaluation, CorsOptions};
use crate::ids::RequestId;
use crate::logging::{init_logging_with_config, LogConfig};
use crate::runtime_config::CorsEnvConfig;
use crate::server::HandlerRequest;

/// Command-line interface for brrtcors
///
/// Loads a CORS policy the same way a service would (config file, then
/// `BRRTR_CORS_*` overrides) and evaluates requests against it.
#[derive(Parser)]
#[command(name = "brrtcors")]
#[command(about = "Inspect and evaluate CORS policies", long_about = None)]
pub struct Cli {
    /// Log CORS decisions to stderr at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one request against a policy and print the headers it would get
    Check {
        /// Policy file (YAML or JSON, top level or under `cors:`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Request method; `OPTIONS` is evaluated as a preflight
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,

        /// `Origin` header value
        #[arg(short, long)]
        origin: Option<String>,

        /// `Access-Control-Request-Method` header value
        #[arg(long)]
        request_method: Option<String>,

        /// `Access-Control-Request-Headers` header value
        #[arg(long)]
        request_headers: Option<String>,

        /// Request id for log correlation (ULID); generated when absent or invalid
        #[arg(long)]
        request_id: Option<String>,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Ignore `BRRTR_CORS_*` environment overrides
        #[arg(long, default_value_t = false)]
        no_env: bool,
    },
    /// Print the normalized policy as YAML
    Show {
        /// Policy file (YAML or JSON, top level or under `cors:`)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ignore `BRRTR_CORS_*` environment overrides
        #[arg(long, default_value_t = false)]
        no_env: bool,
    },
}

/// Parse arguments from the process and run
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let log_config = if cli.verbose {
        LogConfig::default_dev()
    } else {
        LogConfig::from_env()
    };
    init_logging_with_config(&log_config)?;
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Run a parsed command, writing its output to `out`
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Check {
            config,
            method,
            origin,
            request_method,
            request_headers,
            request_id,
            json,
            no_env,
        } => {
            let cors = Cors::new(load_options(config.as_deref(), !no_env)?);
            let method = Method::from_bytes(method.as_bytes())
                .with_context(|| format!("invalid HTTP method '{}'", method))?;

            let mut req = HandlerRequest::new(method, "/");
            req.request_id = RequestId::from_header_or_new(request_id.as_deref());
            if let Some(origin) = &origin {
                req = req.with_header("Origin", origin);
            }
            if let Some(request_method) = &request_method {
                req = req.with_header("Access-Control-Request-Method", request_method);
            }
            if let Some(request_headers) = &request_headers {
                req = req.with_header("Access-Control-Request-Headers", request_headers);
            }

            let evaluation = cors.evaluate(&req);
            if json {
                write_json(out, &req, &evaluation)
            } else {
                write_text(out, &evaluation)
            }
        }
        Commands::Show { config, no_env } => {
            let cors = Cors::new(load_options(config.as_deref(), !no_env)?);
            let yaml = serde_yaml::to_string(cors.policy()).context("serializing policy")?;
            out.write_all(yaml.as_bytes())?;
            Ok(())
        }
    }
}

/// Load options from an optional file, then apply environment overrides
pub fn load_options(config: Option<&Path>, use_env: bool) -> Result<CorsOptions> {
    let options = match config {
        Some(path) => CorsOptions::from_file(path)?,
        None => CorsOptions::default(),
    };
    if !use_env {
        return Ok(options);
    }
    let env = CorsEnvConfig::from_env()?;
    Ok(env.apply(options))
}

fn write_text<W: Write>(out: &mut W, evaluation: &CorsEvaluation) -> Result<()> {
    writeln!(out, "kind: {}", evaluation.kind)?;
    match evaluation.decision {
        CorsDecision::Rejected { reason, .. } => writeln!(out, "decision: rejected ({})", reason)?,
        _ => writeln!(out, "decision: accepted")?,
    }
    for (name, value) in &evaluation.headers {
        writeln!(out, "{}: {}", name, value)?;
    }
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    req: &HandlerRequest,
    evaluation: &CorsEvaluation,
) -> Result<()> {
    let headers: Vec<_> = evaluation
        .headers
        .iter()
        .map(|(name, value)| json!({ "name": name.as_str(), "value": value }))
        .collect();
    let body = json!({
        "request_id": req.request_id,
        "kind": evaluation.kind,
        "decision": evaluation.decision,
        "headers": headers,
    });
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}
