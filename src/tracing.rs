use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Set up the subscriber: non-blocking stdout writer, `RUST_LOG` filter
/// (defaults to `info`), JSON output when `APP_LOG_JSON` is set.
///
/// The returned guard must be held for the process lifetime, otherwise
/// buffered log lines are lost on shutdown.
pub(crate) fn init() -> Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let json_output = std::env::var("APP_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if json_output {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(guard)
}
