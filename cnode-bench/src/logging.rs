//! Tracing subscriber setup.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise events at `level` and above are
/// shown.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
