//! Logging setup for the CLI.
//!
//! Human-readable logs always go to stderr; stdout carries command output
//! (and the MCP protocol under `serve`). A JSON-lines file log is added
//! when `REMARQ_LOG_PATH`, `REMARQ_LOG_DIR` or the `log_dir` config key is
//! set, in that order of precedence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "REMARQ_LOG_PATH";
const LOG_DIR_ENV: &str = "REMARQ_LOG_DIR";
const LOG_FILE_NAME: &str = "remarq.jsonl";

/// Where the JSON-lines log goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file, never rotated.
    File(PathBuf),
    /// A directory of daily-rotated files.
    Directory(PathBuf),
}

/// Resolved logging settings.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// File log destination, if any.
    pub target: Option<LogTarget>,
}

impl ObservabilityConfig {
    /// Read the log destination from the environment, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let target = std::env::var_os(LOG_PATH_ENV)
            .map(|path| LogTarget::File(path.into()))
            .or_else(|| std::env::var_os(LOG_DIR_ENV).map(|dir| LogTarget::Directory(dir.into())))
            .or_else(|| log_dir.map(LogTarget::Directory));
        Self { target }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `quiet` forces `error`, one `-v`
/// raises to `debug` and two or more to `trace`.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Hold on to the returned guard until exit; dropping it flushes the file
/// log.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.target {
        Some(ref target) => {
            let appender = appender_for(target)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn appender_for(target: &LogTarget) -> anyhow::Result<RollingFileAppender> {
    match target {
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            ensure_dir(dir)?;
            Ok(rolling::never(dir, file_name))
        }
        LogTarget::Directory(dir) => {
            ensure_dir(dir)?;
            Ok(rolling::daily(dir, LOG_FILE_NAME))
        }
    }
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_the_fallback() {
        // only meaningful when the environment does not set a destination
        if std::env::var_os(LOG_PATH_ENV).is_none() && std::env::var_os(LOG_DIR_ENV).is_none() {
            let cfg = ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/tmp/logs")));
            assert_eq!(cfg.target, Some(LogTarget::Directory(PathBuf::from("/tmp/logs"))));
            assert_eq!(ObservabilityConfig::from_env_with_overrides(None).target, None);
        }
    }

    #[test]
    fn file_target_creates_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("out.jsonl");
        appender_for(&LogTarget::File(path)).unwrap();
        assert!(tmp.path().join("nested").is_dir());
    }

    #[test]
    fn directory_target_is_created() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        appender_for(&LogTarget::Directory(dir.clone())).unwrap();
        assert!(dir.is_dir());
    }
}
