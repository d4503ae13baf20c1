use std::env;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";
const DEFAULT_LOG_FILE: &str = "./logs/takeout-tidy.log";

/// Console output goes to stderr so a dry-run plan on stdout can be piped.
/// The file log keeps every run, without colours.
pub fn init_logger() -> impl Drop {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let log_file_path = env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never("./", &log_file_path));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .pretty()
        .with_file(false)
        .without_time()
        .with_ansi(true);
    let file = fmt::layer()
        .with_writer(file_writer)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .with(EnvFilter::new(filter))
        .init();

    debug!("Logging takeout-tidy runs to {}", log_file_path);

    guard
}
