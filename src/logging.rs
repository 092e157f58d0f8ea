use std::fs::File;
use std::io::IsTerminal;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Env var naming an optional debug log file.
pub const LOG_ENV: &str = "CURL2MIN_LOG";

/// Initialize tracing.
///
/// Progress goes to stderr at `info` (`warn` when `quiet`); `RUST_LOG`
/// overrides either. Setting `CURL2MIN_LOG` to a path additionally writes a
/// `debug` log, including curl's raw verbose output, to
/// `{path}.{timestamp}.{pid}`.
pub fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_filter(filter);

    let file_layer = open_log_file().map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_level(true)
            .with_filter(LevelFilter::DEBUG)
    });

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file() -> Option<File> {
    let log_path = std::env::var(LOG_ENV).ok()?;

    // Unique per run so concurrent invocations don't interleave.
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => Some(file),
        Err(_) => {
            eprintln!("Warning: Failed to create log file: {}", unique_path);
            None
        }
    }
}
