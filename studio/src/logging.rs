use anyhow::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory holding the CLI's log files, `~/.config/studio/logs`.
pub fn logs_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("studio");
    Ok(config_dir.join("logs"))
}

pub fn log_file_name(at: DateTime<Local>) -> String {
    format!("studio-{}.log", at.format("%Y-%m-%d-%H-%M-%S"))
}

/// Initialize tracing with file-based logging.
///
/// Each run writes a new timestamped file under `dir`. With `verbose`, events
/// are mirrored to stderr as well. `RUST_LOG` overrides the default `info`
/// filter. Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(dir: &Path, verbose: bool) -> Result<(PathBuf, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;

    let log_filename = log_file_name(Local::now());
    let log_path = dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok((log_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_log_file_name_is_timestamped() {
        let at = Local.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(log_file_name(at), "studio-2025-03-07-09-05-01.log");
    }

    #[test]
    fn test_init_logging_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        // Another test may already own the global subscriber
        if let Ok((path, _guard)) = init_logging(&logs, false) {
            assert!(path.starts_with(&logs));
        }
        assert!(logs.is_dir());
    }
}
