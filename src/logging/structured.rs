//! `tracing` subscriber setup
//!
//! Console events go to stderr so that `--json` output on stdout stays clean.
//! When `logging.local_enabled` is set, a second layer writes JSON lines to a
//! rolling file under `logging.local_path`.
//!
//! ```no_run
//! use clinicflow::config::LoggingConfig;
//! use clinicflow::logging::init_logging;
//!
//! let _guard = init_logging("debug", &LoggingConfig::default())?;
//! tracing::info!(kind = "patient", "Ready");
//! # Ok::<(), clinicflow::domain::ClinicError>(())
//! ```

use crate::config::LoggingConfig;
use crate::domain::{ClinicError, Result, ResultExt};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log file name prefix inside `local_path`
pub const LOG_FILE_PREFIX: &str = "clinicflow.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer alive; drop it last so buffered lines
/// reach the file
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file_writer: Option<WorkerGuard>,
}

impl LoggingGuard {
    /// Whether a file writer is attached
    pub fn has_file_output(&self) -> bool {
        self.file_writer.is_some()
    }
}

/// Installs the global subscriber
///
/// `RUST_LOG` wins over `level` when it is set. Fails with `Configuration`
/// for an unknown level or rotation, an uncreatable log directory, or when a
/// subscriber is already installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("clinicflow={level}")))
    };

    let mut layers: Vec<BoxedLayer> = vec![tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter())
        .boxed()];

    let file_writer = if config.local_enabled {
        let (layer, guard) = file_layer(config)?;
        layers.push(layer.with_filter(filter()).boxed());
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| ClinicError::Configuration(format!("Logging already initialized: {e}")))?;

    tracing::debug!(
        level = %level,
        file = config.local_enabled,
        path = %config.local_path,
        rotation = %config.local_rotation,
        "Logging initialized"
    );

    Ok(LoggingGuard { file_writer })
}

fn file_layer(config: &LoggingConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let rotation = parse_rotation(&config.local_rotation)?;
    std::fs::create_dir_all(&config.local_path)
        .map_err(|e| ClinicError::Configuration(e.to_string()))
        .with_context(|| format!("Failed to create log directory {}", config.local_path))?;

    let appender = RollingFileAppender::new(rotation, &config.local_path, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .boxed();
    Ok((layer, guard))
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        ClinicError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

/// Maps a configured rotation name to a tracing-appender rotation
pub fn parse_rotation(rotation: &str) -> Result<Rotation> {
    match rotation.to_lowercase().as_str() {
        "daily" => Ok(Rotation::DAILY),
        "hourly" => Ok(Rotation::HOURLY),
        "never" => Ok(Rotation::NEVER),
        other => Err(ClinicError::Configuration(format!(
            "Invalid log rotation: {other}. Must be one of: daily, hourly, never"
        ))),
    }
}
