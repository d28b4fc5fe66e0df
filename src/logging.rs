//! Structured logging for the example binary.
//!
//! Filter settings come from `--log-level` when given, otherwise from the `RUST_LOG`
//! environment variable. Output goes to stderr so it never mixes with printed values.

use miette::{Context, IntoDiagnostic, Result, miette};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global tracing subscriber.
pub fn init(directive: Option<&str>) -> Result<()> {
    init_with_writer(directive, std::io::stderr)
}

pub fn init_with_writer<W>(directive: Option<&str>, writer: W) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Invalid log level filter: {directive}"))?,
        None => EnvFilter::from_default_env(),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .map_err(|e| miette!("Failed to install tracing subscriber: {e}"))
}
