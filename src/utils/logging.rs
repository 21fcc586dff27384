use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is set. Conversion results go to
/// stdout and never through the logger.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "warn,unit_converter=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
