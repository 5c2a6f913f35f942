//! Logging Infrastructure
//!
//! Structured logging for development and production:
//! - Pretty console output for development, JSON for production
//! - Optional daily rotating application log files (deleted after 14 days)

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Days an application log file is kept
const LOG_RETENTION_DAYS: i64 = 14;

/// Clean up old application log files (older than 14 days)
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // Match hr-server.YYYY-MM-DD pattern produced by the daily appender
        if let Some(date_part) = name.strip_prefix("hr-server.")
            && let Ok(date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize the logging system with optional daily rotating logs
///
/// # Arguments
/// * `level` - Default filter directive when `RUST_LOG` is not set (e.g. "info")
/// * `json_format` - Whether to use JSON format (true for production)
/// * `log_dir` - Optional directory for file logging
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// hr_server::logger::init_logger("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let Some(dir) = log_dir else {
        subscriber.with(console_layer).try_init()?;
        return Ok(());
    };

    let log_dir = Path::new(dir);
    fs::create_dir_all(log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "hr-server");
    let file_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_writer(std::sync::Mutex::new(app_log))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(app_log))
            .boxed()
    };

    subscriber.with(console_layer).with(file_layer).try_init()?;

    tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}
