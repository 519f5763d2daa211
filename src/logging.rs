//! Diagnostic logging setup for the command-line entry point.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or everything from this
/// crate down to `debug` when `verbose` is requested. Stdout stays reserved for the status
/// line so build systems can capture it.
pub fn init_logging(verbose: bool) -> Result<()> {
  let fallback = if verbose {
    "warn,embedded_assets_gen=debug"
  } else {
    "warn"
  };
  let env_filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init()
    .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
