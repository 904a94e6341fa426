//! Logging bootstrap for AgentPath.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use agentpath_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the tracing pipeline according to settings.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call once per
/// process; a second call reports the subscriber conflict as an error.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match settings.log_format {
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?,
        LogFormat::Pretty => builder
            .try_init()
            .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_accepts_default_settings() {
        // First call wins; in a shared test process either outcome is fine
        // as long as it does not panic.
        let _ = init(&TelemetrySettings::default());
    }
}
