use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where and how the host process wants its logs.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directory for the rolling log files. Defaults to `$HOME/.annolint/logs`.
    pub directory: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
    pub to_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            default_filter: "info".to_string(),
            to_stderr: false,
        }
    }
}

impl LoggingConfig {
    pub fn log_dir(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".annolint/logs")
            }
        }
    }
}

/// Installs the global subscriber for `component`.
///
/// The returned guard flushes the file writer on drop and must be kept alive by
/// the caller. If a subscriber is already installed the new one is discarded.
pub fn init_logging(component: &str, config: &LoggingConfig) -> WorkerGuard {
    let log_dir = config.log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // Roll daily, with the component name as the prefix (e.g. `lsp.log.2024-01-21`)
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter.as_str()));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let installed = if config.to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()
    } else {
        registry.try_init()
    };

    if let Err(e) = installed {
        tracing::debug!("logging already initialized: {}", e);
    }

    guard
}
