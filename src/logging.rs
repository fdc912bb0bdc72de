use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Reads `RUST_LOG`, then `LOG_LEVEL`, then
/// falls back to `default_level`. Logs go to stderr so reports on stdout stay clean.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
