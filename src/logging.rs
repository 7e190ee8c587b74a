use std::path::Path;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Name of the log file written next to the images.
pub const LOG_FILE: &str = "dfsmaze.log";

/// Send all `tracing` events at `level` and above to `<dir>/dfsmaze.log`.
///
/// Stdout is left alone for the terminal preview. Keep the returned guard alive for as long as
/// events should be flushed.
pub fn init(dir: &Path, level: Level) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .init();

    guard
}
