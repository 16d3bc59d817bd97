use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable selecting the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "LABYRINTH_LOG";

/// Sends logs to `file_name` in the system temp directory so they never mix with the maze
/// drawn on stdout. Keep the returned guard alive until exit, dropping it flushes the writer.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|raw| raw.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);

    let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    if let Err(err) = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
    {
        eprintln!("Failed to set up logging: {err}");
    }
    guard
}
