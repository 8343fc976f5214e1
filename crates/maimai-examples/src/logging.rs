//! Subscriber installation
//!
//! `RUST_LOG` wins over the configured level when it is set.

use maimai_core::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_filter()))
}

/// Install the global subscriber described by `config`
///
/// Logs go to stderr so route tables on stdout stay machine-readable.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}
