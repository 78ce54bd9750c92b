//! Logging config and utilities
//!
//! Logs always go to stderr or a file so that stdout only carries the smoke report.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logging related options
#[derive(Debug, Deserialize)]
pub struct Logging {
    /// The log level to use for tracing
    #[serde(default = "default_level", deserialize_with = "level_from_str")]
    pub level: Level,

    /// Directory to write log files to. Logs go to stderr when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// How often the log file rolls over when a path is set
    #[serde(default)]
    pub rotation: LogRotationKind,
}

/// Log file rotation period
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotationKind {
    Minutely,
    #[default]
    Hourly,
    Daily,
    Never,
}

impl From<LogRotationKind> for Rotation {
    fn from(value: LogRotationKind) -> Self {
        match value {
            LogRotationKind::Minutely => Rotation::MINUTELY,
            LogRotationKind::Hourly => Rotation::HOURLY,
            LogRotationKind::Daily => Rotation::DAILY,
            LogRotationKind::Never => Rotation::NEVER,
        }
    }
}

const fn default_level() -> Level {
    Level::INFO
}

fn level_from_str<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer)?
        .parse()
        .map_err(serde::de::Error::custom)
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: default_level(),
            path: None,
            rotation: LogRotationKind::default(),
        }
    }
}

impl Logging {
    pub fn env_filter(&self) -> Result<EnvFilter, anyhow::Error> {
        let mut env_filter = EnvFilter::from_default_env().add_directive(self.level.into());

        if self.level == Level::INFO {
            env_filter = env_filter
                .add_directive("hyper_util=warn".parse()?)
                .add_directive("reqwest=warn".parse()?);
        }
        Ok(env_filter)
    }
}

/// Sets up either file logging or stderr logging depending on provided configuration options
pub fn setup_logging(logging: &Logging) -> Result<Option<WorkerGuard>, anyhow::Error> {
    let env_filter = logging.env_filter()?;

    if let Some(path) = &logging.path {
        setup_file_logging(path, env_filter, logging.rotation)
    } else {
        setup_stderr_logging(env_filter)
    }
}

/// Sets up rolling file appender logging but falls back to stderr logging on failure
fn setup_file_logging(
    log_path: &Path,
    env_filter: EnvFilter,
    log_rotation: LogRotationKind,
) -> Result<Option<WorkerGuard>, anyhow::Error> {
    if let Err(err) = std::fs::create_dir_all(log_path) {
        eprintln!("Could not build log path ({err}) - falling back to stderr");
        return setup_stderr_logging(env_filter);
    }

    let (non_blocking_writer, guard) = match RollingFileAppender::builder()
        .rotation(log_rotation.into())
        .filename_prefix("appsync_smoke")
        .filename_suffix("log")
        .build(log_path)
    {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(err) => {
            eprintln!("Log file setup failed ({err}) - falling back to stderr");
            return setup_stderr_logging(env_filter);
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(Some(guard))
}

/// Sets up stderr logging
fn setup_stderr_logging(env_filter: EnvFilter) -> Result<Option<WorkerGuard>, anyhow::Error> {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false),
        )
        .try_init()?;

    Ok(None)
}
