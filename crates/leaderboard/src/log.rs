//! Logging for leaderboard.
use anyhow::Context;
use leaderboard_core::get_data_dir;
use std::io::LineWriter;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::OffsetTime;

const LOG_FILE: &str = "leaderboard.log";
const MAX_LOG_SIZE: u64 = 100 * 1024;

fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "leaderboard=debug,leaderboard_core=debug"
    } else {
        "leaderboard=error,leaderboard_core=error"
    }
}

/// Initializes the application's logging system.
///
/// By default only errors go to stderr; result files that failed to load are
/// reported by the load summary instead. With `verbose` set, debug logs,
/// including every failed fetch, are written to `<data_dir>/leaderboard.log`;
/// a log larger than 100KB is moved to `leaderboard.log.old` first.
///
/// # Errors
///
/// Fails when the data directory or log file cannot be prepared, or the
/// local time offset cannot be determined.
pub fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    if !verbose {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(false))
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .init();
        return Ok(());
    }

    let data_dir = get_data_dir().context("Failed to get data directory")?;
    let log_path = data_dir.join(LOG_FILE);

    if log_path.exists() {
        let metadata = std::fs::metadata(&log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            let backup_path = data_dir.join(format!("{LOG_FILE}.old"));
            if backup_path.exists() {
                std::fs::remove_file(&backup_path)?;
            }
            std::fs::rename(&log_path, backup_path)?;
        }
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    // Flush after every line
    let writer = Mutex::new(LineWriter::new(log_file));

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(true))
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();
    Ok(())
}
