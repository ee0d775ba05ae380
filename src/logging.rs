//! Tracing subscriber setup
//!
//! Log lines go to a rolling file under `log_dir`; in text mode they are
//! mirrored to stdout. The returned guard must live as long as the process,
//! otherwise buffered lines are dropped on exit.

use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    }
}

fn filter_directives(config: &AppConfig) -> String {
    if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},bankcore=off", config.log_level)
    }
}

fn build_filter(config: &AppConfig) -> EnvFilter {
    // RUST_LOG wins over the config file
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config)))
}

pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(file_appender(config));
    let registry = tracing_subscriber::registry().with(build_filter(config));

    if config.use_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true) // Keep target in JSON for structured queries
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .with(fmt::layer().with_target(false).with_ansi(true))
            .init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_silences_crate_when_tracing_disabled() {
        let config = AppConfig {
            enable_tracing: false,
            log_level: "info".to_string(),
            ..AppConfig::default()
        };

        assert!(filter_directives(&config).contains("bankcore=off"));
    }

    // Sets the global subscriber; must stay the only test in this binary
    // that does so.
    #[test]
    fn test_init_logging_writes_to_log_dir() {
        let log_dir = std::env::temp_dir().join("bankcore_logging_test");
        let config = AppConfig {
            log_dir: log_dir.to_string_lossy().into_owned(),
            rotation: "never".to_string(),
            ..AppConfig::default()
        };

        let guard = init_logging(&config);
        tracing::info!("logging smoke test");
        drop(guard);

        assert!(log_dir.join(&config.log_file).exists());
    }
}
