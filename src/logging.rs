use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber writing to stderr, so stdout carries only the session.
///
/// Verbosity comes from `RUST_LOG` and defaults to `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
