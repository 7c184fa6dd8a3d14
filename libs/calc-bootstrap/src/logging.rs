//! Logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `RUST_LOG` wins when set, otherwise `cfg.level`.
fn build_filter(cfg: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(rust_log.as_deref(), &cfg.level)
}

/// First directive set that parses wins; `info` when neither does.
fn filter_for(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| {
            eprintln!("invalid log level '{level}'; falling back to 'info'");
            EnvFilter::new("info")
        })
}

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(cfg: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(build_filter(cfg));

    let result = match cfg.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(level = %cfg.level, format = ?cfg.format, "logging initialized");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let cfg = LoggingConfig::default();
        init_logging(&cfg);
        init_logging(&LoggingConfig {
            level: "debug".to_owned(),
            format: LogFormat::Json,
        });
    }

    #[test]
    fn configured_level_is_used_without_rust_log() {
        assert_eq!(filter_for(None, "debug").to_string(), "debug");
        assert_eq!(
            filter_for(None, "calculator=trace").to_string(),
            "calculator=trace"
        );
    }

    #[test]
    fn rust_log_wins_over_configured_level() {
        assert_eq!(filter_for(Some("warn"), "debug").to_string(), "warn");
    }

    #[test]
    fn unparsable_directives_fall_through() {
        assert_eq!(
            filter_for(Some("calculator=notalevel"), "debug").to_string(),
            "debug"
        );
        assert_eq!(
            filter_for(None, "calculator=notalevel").to_string(),
            "info"
        );
    }
}
